//! CSSF atomic-CSS compiler
//!
//! Turns encoded class names into a stylesheet. A class such as
//! `cssf--bgc_hex-ff0000--p10` becomes
//!
//! ```css
//! .cssf--bgc_hex-ff0000--p10 {
//!   background-color: #ff0000 !important;
//!   padding: 0.625rem !important;
//! }
//! ```
//!
//! # Features
//!
//! - Property aliases with numeric shorthand (`p10`, `mt20px`, `w50p`)
//! - Value markers for colors, variables, quoted strings, unicode escapes and characters
//! - CSS function calls (`fn-`) and computed functions (`cfn-`) such as fluid `clamp()`
//! - Templates that expand into values, declaration lists or further class parts
//! - Target selectors, media and container queries, keyframes and font faces
//! - Deterministic stylesheet layout with breakpoint-sorted at-rules
//!
//! # Basic Usage
//!
//! ```rust
//! use cssf::{Engine, EngineOptions};
//!
//! let mut engine = Engine::new(EngineOptions::default());
//! engine.process_class_list("card cssf--p10 cssf--c_red--tar-pc-hover");
//! let css = engine.rebuild();
//! assert!(css.contains("padding: 0.625rem !important;"));
//! ```
//!
//! # Pipeline
//!
//! 1. **Scanner** - find scheme-prefixed class names in markup or source files
//! 2. **Class Parser** - split a class into parts and dispatch each part
//! 3. **Value Resolver** - resolve value tokens through prefix markers and units
//! 4. **Rule Store** - fold parse results into keyed collections
//! 5. **Stylesheet Builder** - serialize the store in structural order

pub mod cli;
pub mod constants;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod scheduler;
pub mod selector;
pub mod store;
pub mod stylesheet;
pub mod units;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

pub use cli::EnhancedCli;
pub use engine::{BlockedSource, Engine};
pub use error::{CssfError, Result};
pub use lexicon::{Ambient, Lexicon, LexiconOverrides, SystemAmbient};
pub use parser::{ClassParser, ParseContext, RootDeclaration};
pub use resolver::{Expansion, ValueResolver};
pub use scheduler::RebuildScheduler;
pub use store::RuleStore;

/// Compiler version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Template expansion depth ceiling
    pub max_recursion_depth: usize,

    /// Sort every stylesheet section so output is independent of discovery order.
    ///
    /// Off by default: rules keep first-seen order within each section, so the
    /// cascade between same-specificity rules follows source order, but the text
    /// can differ between scans that find the same classes in another order.
    /// Turn it on for reproducible builds and diffable output.
    pub canonical_order: bool,

    /// Log each processed class at info level instead of trace
    pub verbose: bool,

    /// Viewport size reported to `cfn-viewport-*`
    pub viewport: Option<(u32, u32)>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_recursion_depth: constants::MAX_RECURSION_DEPTH,
            canonical_order: false,
            verbose: false,
            viewport: None,
        }
    }
}

/// Build statistics and metrics
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildStats {
    /// Number of input files read
    pub source_count: usize,

    /// Number of distinct class names found in the inputs
    pub class_count: usize,

    /// Number of classes that produced CSS
    pub generated_count: usize,

    /// Number of classes that failed to parse
    pub failed_count: usize,

    /// Number of inputs that could not be read
    pub blocked_count: usize,

    /// Selector rules in the stylesheet
    pub rule_count: usize,

    /// Stylesheet size in bytes
    pub output_size: u64,

    /// Build time in milliseconds
    pub compile_time_ms: u64,
}

/// Compile a list of class names into a stylesheet.
pub fn compile_classes<I, S>(class_names: I, options: EngineOptions) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut engine = Engine::new(options);
    engine.process_classes(class_names);
    engine.rebuild().to_string()
}

/// Compile every class name found in a piece of markup or source text.
pub fn compile_source(source: &str) -> String {
    compile_classes(scanner::extract_class_names(source), EngineOptions::default())
}

/// Scan `files` into `engine`. Unreadable files are recorded as blocked
/// sources and skipped.
pub fn scan_sources<P: AsRef<Path>>(engine: &mut Engine, files: &[P]) -> BuildStats {
    let mut stats = BuildStats::default();
    let failed_before = engine.failed_count();

    for file in files {
        let file = file.as_ref();
        match scanner::scan_file(file) {
            Ok(class_names) => {
                stats.source_count += 1;
                stats.class_count += class_names.len();
                stats.generated_count += engine.process_classes(&class_names);
                log::debug!("{}: {} classes", file.display(), class_names.len());
            }
            Err(e) => {
                stats.blocked_count += 1;
                engine.block_source(file.display().to_string(), e.to_string());
            }
        }
    }

    stats.failed_count = engine.failed_count() - failed_before;
    stats.rule_count = engine.store().rule_count();
    stats
}

/// Main entry point with default options
pub fn compile_file(input_path: &str, output_path: &str) -> Result<BuildStats> {
    compile_file_with_options(input_path, output_path, EngineOptions::default())
}

/// Compile the classes used in one input file and write the stylesheet
pub fn compile_file_with_options(
    input_path: &str,
    output_path: &str,
    options: EngineOptions,
) -> Result<BuildStats> {
    let start_time = Instant::now();

    if !Path::new(input_path).is_file() {
        return Err(CssfError::FileNotFound {
            path: input_path.to_string(),
        });
    }

    log::info!("Compiling '{}' to '{}'...", input_path, output_path);
    log::debug!("Engine options: {:?}", options);

    let mut engine = Engine::new(options);
    let mut stats = scan_sources(&mut engine, &[input_path]);
    if let Some(blocked) = engine.blocked_sources().first() {
        return Err(CssfError::FileNotFound {
            path: format!("{}: {}", blocked.source, blocked.reason),
        });
    }

    let css = engine.rebuild();
    std::fs::write(output_path, css)?;

    stats.output_size = css.len() as u64;
    stats.compile_time_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "Generated {} rules ({} bytes) in {}ms",
        stats.rule_count,
        stats.output_size,
        stats.compile_time_ms
    );
    Ok(stats)
}
