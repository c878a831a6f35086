// FILE: src/cli/handlers.rs
use crate::{
    cli::OutputFormat, // Import from the `cli` module
    parser::ClassParser,
    scan_sources,
    scanner::{collect_inputs, scan_file},
    scheduler::RebuildScheduler,
    stylesheet::style_element,
    BuildStats, CssfError, Engine, Result,
};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::fs;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

const DEFAULT_OUTPUT: &str = "cssf.css";

/// Events arriving within this window of each other are folded into one rebuild.
const WATCH_SETTLE: Duration = Duration::from_millis(50);

// --- BUILD ---
pub fn handle_build_command(cli: &super::EnhancedCli, matches: &clap::ArgMatches) -> Result<()> {
    let inputs: Vec<String> = match matches.get_many::<String>("inputs") {
        Some(values) => values.cloned().collect(),
        None => cli.config.inputs.clone().unwrap_or_default(),
    };
    if inputs.is_empty() {
        return Err(CssfError::InvalidFormat {
            message: "No inputs given. Pass files or directories, or set `inputs` in the config file.".to_string(),
        });
    }

    let output_path = matches
        .get_one::<String>("output")
        .cloned()
        .or_else(|| cli.config.output.clone())
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let recursive = matches.get_flag("recursive") || cli.config.recursive.unwrap_or(false);

    let job = BuildJob {
        inputs,
        output_path,
        recursive,
        extensions: cli.extensions(),
    };
    let mut engine = Engine::with_lexicon(cli.build_lexicon(), cli.build_engine_options(matches)?);

    if matches.get_flag("watch") {
        watch_and_build(&job, &mut engine)
    } else {
        println!("🔨 Building {} -> {}", job.inputs.join(", "), job.output_path);
        let stats = job.run(&mut engine)?;
        println!("✅ Build successful!");
        println!("   Rules: {}", stats.rule_count);
        println!("   Output: {} bytes", stats.output_size);
        println!("   Time: {}ms", cli.elapsed_ms());
        if stats.blocked_count > 0 {
            println!("⚠️  {} inputs could not be read", stats.blocked_count);
        }
        if matches.get_flag("stats") {
            print_detailed_stats(&stats, &engine)?;
        }
        Ok(())
    }
}

struct BuildJob {
    inputs: Vec<String>,
    output_path: String,
    recursive: bool,
    extensions: Vec<String>,
}

impl BuildJob {
    /// Scan inputs into `engine`, rebuild and write the stylesheet. Classes the
    /// engine has already seen are skipped, so repeated runs only parse new ones.
    fn run(&self, engine: &mut Engine) -> Result<BuildStats> {
        let start = Instant::now();
        let files = collect_inputs(&self.inputs, self.recursive, &self.extensions)?;
        let mut stats = scan_sources(engine, &files);

        let css = engine.rebuild();
        if let Some(parent) = Path::new(&self.output_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.output_path, css)?;

        stats.output_size = css.len() as u64;
        stats.compile_time_ms = start.elapsed().as_millis() as u64;
        log::info!(
            "Wrote {} ({} rules, {} bytes)",
            self.output_path,
            stats.rule_count,
            stats.output_size
        );
        Ok(stats)
    }

    fn touches_output(&self, event: &Event) -> bool {
        let output = Path::new(&self.output_path);
        let output = output.canonicalize().unwrap_or_else(|_| output.to_path_buf());
        event.paths.iter().all(|path| {
            path == &output || path.canonicalize().map_or(false, |p| p == output)
        })
    }
}

fn watch_and_build(job: &BuildJob, engine: &mut Engine) -> Result<()> {
    println!("👀 Watching {} for changes...", job.inputs.join(", "));

    let (tx, rx) = channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                if let Err(e) = tx.send(event) {
                    eprintln!("Watch error: {}", e);
                }
            }
        },
        notify::Config::default(),
    )
    .map_err(|e| CssfError::watch(format!("Failed to create file watcher: {}", e)))?;

    let mode = if job.recursive {
        RecursiveMode::Recursive
    } else {
        RecursiveMode::NonRecursive
    };
    for input in &job.inputs {
        watcher
            .watch(Path::new(input), mode)
            .map_err(|e| CssfError::watch(format!("Failed to watch {}: {}", input, e)))?;
    }

    match job.run(engine) {
        Ok(stats) => println!("✅ Initial build successful ({} rules)", stats.rule_count),
        Err(e) => eprintln!("❌ Initial build failed: {}", e),
    }

    let mut scheduler = RebuildScheduler::new();
    loop {
        let event = match rx.recv() {
            Ok(event) => event,
            Err(e) => {
                eprintln!("Watch error: {}", e);
                break;
            }
        };
        if job.touches_output(&event) {
            continue;
        }

        scheduler.schedule();
        drain_burst(&rx, &mut scheduler);

        if scheduler.take() {
            println!("🔄 Inputs changed, rebuilding...");
            match job.run(engine) {
                Ok(stats) => println!(
                    "✅ Rebuilt successfully ({} new classes, {} bytes, {}ms)",
                    stats.generated_count, stats.output_size, stats.compile_time_ms
                ),
                Err(e) => eprintln!("❌ Build failed: {}", e),
            }
        }
    }

    Ok(())
}

/// Swallow the rest of a burst of change events; each one only re-requests
/// the rebuild that is already pending.
fn drain_burst(rx: &Receiver<Event>, scheduler: &mut RebuildScheduler) {
    let mut coalesced = 0;
    while rx.recv_timeout(WATCH_SETTLE).is_ok() {
        if !scheduler.schedule() {
            coalesced += 1;
        }
    }
    if coalesced > 0 {
        log::debug!("Coalesced {} change events into one rebuild", coalesced);
    }
}

fn print_detailed_stats(stats: &BuildStats, engine: &Engine) -> Result<()> {
    println!("\n📊 Detailed Statistics:");
    println!("   Sources scanned: {}", stats.source_count);
    println!("   Classes found: {}", stats.class_count);
    println!("   Classes with CSS: {}", stats.generated_count);
    println!("   Failed classes: {}", stats.failed_count);
    println!("   Root variables: {}", engine.root_variables().len());
    println!("   Keyframes: {}", engine.store().keyframes().len());
    println!("   Font faces: {}", engine.store().font_faces().len());
    println!("   At-rule groups: {}", engine.store().at_rule_groups().len());
    println!(
        "   Lexicon: {} aliases, {} templates",
        engine.lexicon().alias_count(),
        engine.lexicon().template_count()
    );
    for blocked in engine.blocked_sources() {
        println!("   Blocked: {} ({})", blocked.source, blocked.reason);
    }
    log::debug!(
        "Full stats: {}",
        serde_json::to_string(stats).map_err(|e| CssfError::InvalidFormat {
            message: format!("JSON serialization error: {}", e),
        })?
    );
    Ok(())
}

// --- COMPILE ---
pub fn handle_compile_command(cli: &super::EnhancedCli, matches: &clap::ArgMatches) -> Result<()> {
    let class_lists: Vec<&String> = matches
        .get_many::<String>("classes")
        .map(|values| values.collect())
        .unwrap_or_default();
    let format = matches
        .get_one::<OutputFormat>("format")
        .cloned()
        .unwrap_or(OutputFormat::Css);

    let mut engine = Engine::with_lexicon(cli.build_lexicon(), cli.build_engine_options(matches)?);
    for class_list in &class_lists {
        engine.process_class_list(class_list);
    }
    let css = engine.rebuild().to_string();

    match format {
        OutputFormat::Css => println!("{}", css),
        OutputFormat::Html => println!("{}", style_element(&css)),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "stylesheet": css,
                "rules": engine.store(),
                "root_variables": engine.root_variables(),
                "failed": engine.failed_count(),
            });
            let text = serde_json::to_string_pretty(&report).map_err(|e| CssfError::InvalidFormat {
                message: format!("JSON serialization error: {}", e),
            })?;
            println!("{}", text);
        }
        OutputFormat::Debug => {
            let ambient = crate::SystemAmbient::new(engine.options().viewport);
            let parser = ClassParser::new(
                engine.lexicon(),
                &ambient,
                engine.options().max_recursion_depth,
            );
            for class_name in class_lists.iter().flat_map(|list| list.split_whitespace()) {
                match parser.parse(class_name) {
                    Ok(Some(context)) => println!("{:#?}", context),
                    Ok(None) => println!("{}: no CSS", class_name),
                    Err(e) => println!("{}", e),
                }
            }
            println!("\n{}", css);
        }
    }

    Ok(())
}

// --- CHECK ---
pub fn handle_check_command(cli: &super::EnhancedCli, matches: &clap::ArgMatches) -> Result<()> {
    let inputs: Vec<String> = matches
        .get_many::<String>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let recursive = matches.get_flag("recursive") || cli.config.recursive.unwrap_or(false);
    let files = collect_inputs(&inputs, recursive, &cli.extensions())?;

    let lexicon = cli.build_lexicon();
    let options = cli.build_engine_options(matches)?;
    let ambient = crate::SystemAmbient::new(options.viewport);
    let parser = ClassParser::new(&lexicon, &ambient, options.max_recursion_depth);

    let mut total_classes = 0;
    let mut error_count = 0;
    let mut empty_count = 0;

    for file in &files {
        println!("🔍 Checking {}", file.display());
        let class_names = match scan_file(file) {
            Ok(names) => names,
            Err(e) => {
                println!("❌ {} - {}", file.display(), e);
                error_count += 1;
                continue;
            }
        };
        for class_name in &class_names {
            total_classes += 1;
            match parser.parse(class_name) {
                Ok(Some(_)) => {}
                Ok(None) => {
                    empty_count += 1;
                    println!("⚠️  {} produces no CSS", class_name);
                }
                Err(e) => {
                    error_count += 1;
                    println!("❌ {}", e);
                }
            }
        }
    }

    println!("\n📊 Check Summary:");
    println!("   Files: {}", files.len());
    println!("   Classes: {}", total_classes);
    println!("   Without CSS: {}", empty_count);
    println!("   Errors: {}", error_count);

    if error_count > 0 {
        Err(CssfError::InvalidFormat {
            message: format!("{} problems found", error_count),
        })
    } else {
        Ok(())
    }
}
