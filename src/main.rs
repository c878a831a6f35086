//! CSSF Compiler Binary

use cssf::{CssfError, EnhancedCli};
use std::process;

fn main() {
    let mut cli = EnhancedCli::new();

    match cli.run() {
        Ok(()) => {}
        Err(CssfError::Io(e)) => {
            eprintln!("IO Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    }
}
