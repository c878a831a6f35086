//! Engine state: processed classes, rule store, pending rebuild and the
//! generated stylesheet
//!
//! One [`Engine`] owns everything that lives across scans. `reset()` returns it
//! to the freshly constructed state.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

use crate::constants::SCHEME;
use crate::lexicon::{Ambient, Lexicon, SystemAmbient};
use crate::parser::ClassParser;
use crate::scheduler::RebuildScheduler;
use crate::store::RuleStore;
use crate::stylesheet;
use crate::EngineOptions;

/// An input that could not be read, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockedSource {
    pub source: String,
    pub reason: String,
}

pub struct Engine {
    lexicon: Lexicon,
    ambient: Box<dyn Ambient>,
    options: EngineOptions,
    processed: HashSet<String>,
    store: RuleStore,
    scheduler: RebuildScheduler,
    stylesheet: String,
    blocked: Vec<BlockedSource>,
    failed: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self::with_lexicon(Lexicon::new(), options)
    }

    pub fn with_lexicon(lexicon: Lexicon, options: EngineOptions) -> Self {
        let ambient = SystemAmbient::new(options.viewport);
        Self {
            lexicon,
            ambient: Box::new(ambient),
            options,
            processed: HashSet::new(),
            store: RuleStore::new(),
            scheduler: RebuildScheduler::new(),
            stylesheet: String::new(),
            blocked: Vec::new(),
            failed: 0,
        }
    }

    /// Replace the clock/viewport/random source used by custom functions.
    pub fn with_ambient(mut self, ambient: impl Ambient + 'static) -> Self {
        self.ambient = Box::new(ambient);
        self
    }

    /// Parse and store one class. Returns true when the class was new and
    /// produced CSS. Names without the scheme marker are ignored.
    pub fn process_class(&mut self, class_name: &str) -> bool {
        if !class_name.starts_with(SCHEME) || self.processed.contains(class_name) {
            return false;
        }
        self.processed.insert(class_name.to_string());

        let parser = ClassParser::new(
            &self.lexicon,
            self.ambient.as_ref(),
            self.options.max_recursion_depth,
        );
        match parser.parse(class_name) {
            Ok(Some(context)) => {
                if self.options.verbose {
                    log::info!(
                        "{} -> {} ({} declarations)",
                        class_name,
                        context.selector,
                        context.declarations.len()
                    );
                } else {
                    log::trace!("{} -> {:?}", class_name, context);
                }
                self.store.insert(context);
                self.scheduler.schedule();
                true
            }
            Ok(None) => {
                log::debug!("Class '{}' produced no CSS", class_name);
                false
            }
            Err(e) => {
                self.failed += 1;
                log::error!("{}", e);
                false
            }
        }
    }

    /// Process a whitespace-separated class attribute value.
    pub fn process_class_list(&mut self, class_list: &str) -> usize {
        self.process_classes(class_list.split_whitespace())
    }

    /// Process classes in order. Returns how many produced new CSS.
    pub fn process_classes<I, S>(&mut self, class_names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        class_names
            .into_iter()
            .filter(|class_name| self.process_class(class_name.as_ref()))
            .count()
    }

    /// Run the pending rebuild, if any. Returns the new stylesheet only when a
    /// rebuild actually ran.
    pub fn flush(&mut self) -> Option<&str> {
        if self.scheduler.take() {
            Some(self.regenerate())
        } else {
            None
        }
    }

    /// Rebuild now, dropping any pending rebuild.
    pub fn rebuild(&mut self) -> &str {
        self.scheduler.cancel();
        self.regenerate()
    }

    fn regenerate(&mut self) -> &str {
        self.stylesheet = stylesheet::build(&self.store, self.options.canonical_order);
        log::debug!(
            "Rebuilt stylesheet: {} rules, {} bytes",
            self.store.rule_count(),
            self.stylesheet.len()
        );
        &self.stylesheet
    }

    /// Text of the last rebuild.
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Forget every processed class and all generated CSS.
    pub fn reset(&mut self) {
        self.processed.clear();
        self.store.clear();
        self.scheduler.cancel();
        self.stylesheet.clear();
        self.failed = 0;
    }

    pub fn is_processed(&self, class_name: &str) -> bool {
        self.processed.contains(class_name)
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Classes whose parse failed since the last reset.
    pub fn failed_count(&self) -> usize {
        self.failed
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn scheduler(&self) -> &RebuildScheduler {
        &self.scheduler
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.options.verbose = verbose;
    }

    pub fn is_verbose(&self) -> bool {
        self.options.verbose
    }

    /// Custom properties currently declared on `:root`, later declarations winning.
    pub fn root_variables(&self) -> IndexMap<String, String> {
        self.store
            .root_declarations()
            .iter()
            .map(|root| (format!("--{}", root.name), root.value.clone()))
            .collect()
    }

    /// Record an unreadable source. A source is listed once; blocking it again
    /// only refreshes the reason.
    pub fn block_source(&mut self, source: impl Into<String>, reason: impl Into<String>) {
        let blocked = BlockedSource {
            source: source.into(),
            reason: reason.into(),
        };
        log::warn!("Skipping unreadable source {}: {}", blocked.source, blocked.reason);
        match self.blocked.iter_mut().find(|b| b.source == blocked.source) {
            Some(existing) => existing.reason = blocked.reason,
            None => self.blocked.push(blocked),
        }
    }

    pub fn blocked_sources(&self) -> &[BlockedSource] {
        &self.blocked
    }
}
