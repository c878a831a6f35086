//! Static lookup tables: property aliases, character names, templates,
//! custom functions and value prefix markers

mod aliases;
mod chars;
mod functions;
mod prefixes;
mod templates;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{PLACEHOLDER, SCHEME, VALUE_SEPARATOR};
use crate::units::is_numeric;

pub use functions::{clamp_builder, parse_leading_float, Ambient, CustomFunction, SystemAmbient};
pub use prefixes::{PrefixKind, PrefixRegistry};

#[cfg(test)]
pub(crate) use functions::testing;

static PLACEHOLDER_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"§(\d+)").unwrap());

/// A named blueprint with positional placeholders (`§0`, `§1`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    blueprint: String,
    arity: usize,
}

impl Template {
    pub fn new(blueprint: impl Into<String>) -> Self {
        let blueprint = blueprint.into();
        let arity = PLACEHOLDER_INDEX
            .captures_iter(&blueprint)
            .filter_map(|caps| caps[1].parse::<usize>().ok())
            .max()
            .map_or(0, |highest| highest + 1);
        Self { blueprint, arity }
    }

    pub fn blueprint(&self) -> &str {
        &self.blueprint
    }

    /// Number of arguments the blueprint expects: highest placeholder index plus one.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Replace `§i` with `args[i]`. Placeholders without an argument stay in place.
    pub fn substitute<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut result = self.blueprint.clone();
        // Highest index first so `§1` never eats the front of `§10`.
        for (index, arg) in args.iter().enumerate().rev() {
            let placeholder = format!("{}{}", PLACEHOLDER, index);
            result = result.replace(&placeholder, arg.as_ref());
        }
        result
    }

    /// True when `text` is a nested class expression rather than CSS text.
    pub fn is_class_expression(text: &str) -> bool {
        text.starts_with(SCHEME)
    }

    /// True when `text` is a `;`-separated declaration list.
    pub fn is_declaration_list(text: &str) -> bool {
        text.contains(';')
    }
}

/// Alias target as written in configuration files: one property or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasTarget {
    One(String),
    Many(Vec<String>),
}

impl AliasTarget {
    fn into_properties(self) -> Vec<String> {
        match self {
            AliasTarget::One(property) => vec![property],
            AliasTarget::Many(properties) => properties,
        }
    }
}

/// User additions merged over the built-in tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconOverrides {
    #[serde(default)]
    pub aliases: HashMap<String, AliasTarget>,
    #[serde(default)]
    pub templates: HashMap<String, String>,
    #[serde(default)]
    pub chars: HashMap<String, String>,
}

impl LexiconOverrides {
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.templates.is_empty() && self.chars.is_empty()
    }
}

#[derive(Clone)]
pub struct Lexicon {
    aliases: HashMap<String, Vec<String>>,
    chars: HashMap<String, String>,
    templates: HashMap<String, Template>,
    functions: HashMap<String, CustomFunction>,
    prefixes: PrefixRegistry,
}

impl Default for Lexicon {
    fn default() -> Self {
        let mut lexicon = Self::empty();
        for (alias, properties) in aliases::ALIASES {
            lexicon.add_alias(*alias, properties.iter().map(|p| p.to_string()).collect());
        }
        for (name, character) in chars::CHARS {
            lexicon.add_char(*name, *character);
        }
        for (name, blueprint) in templates::TEMPLATES {
            lexicon.add_template(*name, *blueprint);
        }
        for (name, function) in functions::FUNCTIONS {
            lexicon.add_function(*name, *function);
        }
        lexicon
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("aliases", &self.aliases.len())
            .field("chars", &self.chars.len())
            .field("templates", &self.templates.len())
            .field("functions", &self.functions.len())
            .field("prefixes", &self.prefixes.len())
            .finish()
    }
}

impl Lexicon {
    /// Built-in tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// No aliases, characters, templates or functions; default prefix markers only.
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
            chars: HashMap::new(),
            templates: HashMap::new(),
            functions: HashMap::new(),
            prefixes: PrefixRegistry::default(),
        }
    }

    pub fn with_overrides(overrides: &LexiconOverrides) -> Self {
        let mut lexicon = Self::new();
        lexicon.apply(overrides);
        lexicon
    }

    pub fn apply(&mut self, overrides: &LexiconOverrides) {
        for (alias, target) in &overrides.aliases {
            self.add_alias(alias.clone(), target.clone().into_properties());
        }
        for (name, blueprint) in &overrides.templates {
            self.add_template(name.clone(), blueprint.clone());
        }
        for (name, character) in &overrides.chars {
            self.add_char(name.clone(), character.clone());
        }
        log::debug!(
            "Applied lexicon overrides: {} aliases, {} templates, {} chars",
            overrides.aliases.len(),
            overrides.templates.len(),
            overrides.chars.len()
        );
    }

    pub fn add_alias(&mut self, alias: impl Into<String>, properties: Vec<String>) {
        self.aliases.insert(alias.into(), properties);
    }

    pub fn add_char(&mut self, name: impl Into<String>, character: impl Into<String>) {
        self.chars.insert(name.into(), character.into());
    }

    pub fn add_template(&mut self, name: impl Into<String>, blueprint: impl Into<String>) {
        self.templates.insert(name.into(), Template::new(blueprint));
    }

    pub fn add_function(&mut self, name: impl Into<String>, function: CustomFunction) {
        self.functions.insert(name.into(), function);
    }

    pub fn alias(&self, alias: &str) -> Option<&[String]> {
        self.aliases.get(alias).map(Vec::as_slice)
    }

    /// Exact alias lookup, falling back to the token itself as the property name.
    pub fn properties_for(&self, token: &str) -> Vec<String> {
        match self.alias(token) {
            Some(properties) => properties.to_vec(),
            None => vec![token.to_string()],
        }
    }

    /// Longest alias at the front of `part` followed by a numeric remainder
    /// (`p10`, `mtn5`, `h100dvh`).
    pub fn numeric_alias<'p>(&self, part: &'p str) -> Option<(&[String], &'p str)> {
        if part.contains(VALUE_SEPARATOR) {
            return None;
        }
        self.aliases
            .iter()
            .filter_map(|(alias, properties)| {
                let rest = part.strip_prefix(alias.as_str())?;
                (!rest.is_empty() && is_numeric(rest)).then_some((alias.len(), properties, rest))
            })
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, properties, rest)| (properties.as_slice(), rest))
    }

    /// Longest full property name at the front of `part` followed by a numeric
    /// remainder (`max-width1200px`).
    pub fn numeric_property<'p>(&self, part: &'p str) -> Option<(String, &'p str)> {
        if part.contains(VALUE_SEPARATOR) {
            return None;
        }
        self.aliases
            .values()
            .filter(|properties| properties.len() == 1)
            .map(|properties| properties[0].as_str())
            .filter_map(|property| {
                let rest = part.strip_prefix(property)?;
                (!rest.is_empty() && is_numeric(rest)).then_some((property, rest))
            })
            .max_by_key(|(property, _)| property.len())
            .map(|(property, rest)| (property.to_string(), rest))
    }

    pub fn char_for(&self, name: &str) -> Option<&str> {
        self.chars.get(name).map(String::as_str)
    }

    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn function(&self, name: &str) -> Option<CustomFunction> {
        self.functions.get(name).copied()
    }

    pub fn prefixes(&self) -> &PrefixRegistry {
        &self.prefixes
    }

    pub fn prefixes_mut(&mut self) -> &mut PrefixRegistry {
        &mut self.prefixes
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}
