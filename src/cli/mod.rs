// FILE: src/cli/mod.rs

mod config;
mod handlers;

use crate::error::{CssfError, Result};
use crate::lexicon::Lexicon;
use crate::scanner::DEFAULT_EXTENSIONS;
use crate::EngineOptions;
use clap::{Arg, ArgAction, Command, ValueEnum};
use std::time::Instant;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Css,
    Html,
    Json,
    Debug,
}

pub struct EnhancedCli {
    config: config::ConfigFile,
    start_time: Instant,
}

impl Default for EnhancedCli {
    fn default() -> Self {
        Self::new()
    }
}

impl EnhancedCli {
    pub fn new() -> Self {
        Self {
            config: config::ConfigFile::default(),
            start_time: Instant::now(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.start_time = Instant::now();
        let matches = self.build_cli().get_matches();

        self.setup_logging(matches.get_count("verbose"))?;

        if let Some(config_path) = matches.get_one::<String>("config") {
            self.config = config::load(config_path)?;
        }

        match matches.subcommand() {
            Some(("build", sub_matches)) => handlers::handle_build_command(self, sub_matches),
            Some(("compile", sub_matches)) => handlers::handle_compile_command(self, sub_matches),
            Some(("check", sub_matches)) => handlers::handle_check_command(self, sub_matches),
            _ => {
                println!("No subcommand specified. Use --help for usage information.");
                Ok(())
            }
        }
    }

    fn build_cli(&self) -> Command {
        Command::new(crate::NAME)
            .version(crate::VERSION)
            .about(crate::DESCRIPTION)
            .author("CSSF Development Team")
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path (.json or .toml)")
                    .global(true)
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Increase verbosity (can be used multiple times)")
                    .global(true)
                    .action(ArgAction::Count),
            )
            .subcommand(
                Command::new("build")
                    .about("Scan files for cssf classes and write the stylesheet")
                    .arg(Arg::new("inputs").help("Input files or directories").num_args(1..).action(ArgAction::Append))
                    .arg(Arg::new("output").short('o').long("output").value_name("FILE").help("Output stylesheet (default: cssf.css)"))
                    .arg(Arg::new("recursive").short('r').long("recursive").help("Descend into subdirectories").action(ArgAction::SetTrue))
                    .arg(Arg::new("watch").short('w').long("watch").help("Watch inputs and rebuild on change").action(ArgAction::SetTrue))
                    .arg(Arg::new("stats").long("stats").help("Show detailed build statistics").action(ArgAction::SetTrue))
                    .arg(Arg::new("canonical").long("canonical").help("Sort output so it does not depend on discovery order").action(ArgAction::SetTrue))
                    .arg(Arg::new("max-depth").long("max-depth").value_name("N").value_parser(clap::value_parser!(usize)).help("Template expansion depth ceiling")),
            )
            .subcommand(
                Command::new("compile")
                    .about("Compile class names given on the command line")
                    .arg(Arg::new("classes").help("Class names or class lists").required(true).num_args(1..).action(ArgAction::Append))
                    .arg(Arg::new("format").short('f').long("format").value_parser(clap::value_parser!(OutputFormat)).default_value("css").help("Output format"))
                    .arg(Arg::new("canonical").long("canonical").help("Sort output so it does not depend on argument order").action(ArgAction::SetTrue)),
            )
            .subcommand(
                Command::new("check")
                    .about("Report cssf classes that fail to parse or produce no CSS")
                    .arg(Arg::new("inputs").help("Input files or directories").required(true).num_args(1..).action(ArgAction::Append))
                    .arg(Arg::new("recursive").short('r').long("recursive").help("Check directories recursively").action(ArgAction::SetTrue)),
            )
    }

    fn setup_logging(&self, verbose_count: u8) -> Result<()> {
        let log_level = match verbose_count {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .format_timestamp_secs()
            .init();
        Ok(())
    }

    /// Command-line flags over config file values over defaults.
    pub fn build_engine_options(&self, matches: &clap::ArgMatches) -> Result<EngineOptions> {
        let mut options = EngineOptions::default();

        if let Some(depth) = self.config.max_recursion_depth {
            options.max_recursion_depth = depth;
        }
        if let Ok(Some(depth)) = matches.try_get_one::<usize>("max-depth") {
            if *depth == 0 {
                return Err(CssfError::InvalidFormat {
                    message: "--max-depth must be at least 1".to_string(),
                });
            }
            options.max_recursion_depth = *depth;
        }

        let canonical_flag = matches!(matches.try_get_one::<bool>("canonical"), Ok(Some(true)));
        options.canonical_order = canonical_flag || self.config.canonical_order.unwrap_or(false);
        options.verbose = matches.get_count("verbose") > 0;
        options.viewport = self.config.viewport();

        Ok(options)
    }

    /// Built-in tables with the config file's `[lexicon]` additions.
    pub fn build_lexicon(&self) -> Lexicon {
        Lexicon::with_overrides(&self.config.lexicon)
    }

    pub fn extensions(&self) -> Vec<String> {
        match &self.config.extensions {
            Some(extensions) => extensions.clone(),
            None => DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }
}
