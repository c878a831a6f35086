//! Registry of value prefix markers

use std::fmt;

/// What a value token means once its prefix marker is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixKind {
    HexColor,
    VarReference,
    CustomPropertyName,
    RootValue,
    Template,
    Character,
    Unicode,
    Quoted,
    Group,
    Target,
    Function,
    CustomFunction,
}

impl fmt::Display for PrefixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrefixKind::HexColor => "hex color",
            PrefixKind::VarReference => "variable reference",
            PrefixKind::CustomPropertyName => "custom property name",
            PrefixKind::RootValue => "root value",
            PrefixKind::Template => "template",
            PrefixKind::Character => "character",
            PrefixKind::Unicode => "unicode escape",
            PrefixKind::Quoted => "quoted string",
            PrefixKind::Group => "selector group",
            PrefixKind::Target => "target selector",
            PrefixKind::Function => "function",
            PrefixKind::CustomFunction => "custom function",
        };
        write!(f, "{}", name)
    }
}

const DEFAULT_PREFIXES: &[(&str, PrefixKind)] = &[
    ("hex-", PrefixKind::HexColor),
    ("var-", PrefixKind::VarReference),
    ("val-", PrefixKind::CustomPropertyName),
    ("rval-", PrefixKind::RootValue),
    ("tpl-", PrefixKind::Template),
    ("chr-", PrefixKind::Character),
    ("uni-", PrefixKind::Unicode),
    ("str-", PrefixKind::Quoted),
    ("group-", PrefixKind::Group),
    ("tar-", PrefixKind::Target),
    ("fn-", PrefixKind::Function),
    ("cfn-", PrefixKind::CustomFunction),
];

/// Ordered `(prefix, kind)` pairs matched by longest prefix, never by
/// registration order.
#[derive(Debug, Clone)]
pub struct PrefixRegistry {
    entries: Vec<(String, PrefixKind)>,
}

impl Default for PrefixRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for (prefix, kind) in DEFAULT_PREFIXES {
            registry.register(*prefix, *kind);
        }
        registry
    }
}

impl PrefixRegistry {
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register a marker. Re-registering an existing marker rebinds it.
    pub fn register(&mut self, prefix: impl Into<String>, kind: PrefixKind) {
        let prefix = prefix.into();
        match self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = kind,
            None => self.entries.push((prefix, kind)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest registered prefix of `token`.
    pub fn longest_match(&self, token: &str) -> Option<(&str, PrefixKind)> {
        self.longest_match_excluding(token, None)
    }

    /// Longest registered prefix of `token`, ignoring handlers of kind `excluded`.
    pub fn longest_match_excluding(
        &self,
        token: &str,
        excluded: Option<PrefixKind>,
    ) -> Option<(&str, PrefixKind)> {
        self.entries
            .iter()
            .filter(|(prefix, kind)| Some(*kind) != excluded && token.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, kind)| (prefix.as_str(), *kind))
    }

    /// True when `word` is a registered marker without its trailing dash (`var`, `hex`).
    pub fn is_bare_marker(&self, word: &str) -> bool {
        self.entries
            .iter()
            .any(|(prefix, _)| prefix.strip_suffix('-') == Some(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let registry = PrefixRegistry::default();
        assert_eq!(registry.len(), 12);
        assert_eq!(
            registry.longest_match("hex-ff0000"),
            Some(("hex-", PrefixKind::HexColor))
        );
        assert_eq!(
            registry.longest_match("cfn-year"),
            Some(("cfn-", PrefixKind::CustomFunction))
        );
        assert_eq!(registry.longest_match("solid"), None);
    }

    #[test]
    fn test_longest_prefix_wins_over_registration_order() {
        let mut registry = PrefixRegistry::empty();
        registry.register("va-", PrefixKind::Character);
        registry.register("val-", PrefixKind::CustomPropertyName);
        assert_eq!(
            registry.longest_match("val-gap"),
            Some(("val-", PrefixKind::CustomPropertyName))
        );

        let mut reversed = PrefixRegistry::empty();
        reversed.register("val-", PrefixKind::CustomPropertyName);
        reversed.register("va-", PrefixKind::Character);
        assert_eq!(
            reversed.longest_match("val-gap"),
            Some(("val-", PrefixKind::CustomPropertyName))
        );
        assert_eq!(reversed.longest_match("va-x"), Some(("va-", PrefixKind::Character)));
    }

    #[test]
    fn test_overlapping_markers_sharing_a_stem() {
        let mut registry = PrefixRegistry::default();
        registry.register("hexa-", PrefixKind::Unicode);
        assert_eq!(
            registry.longest_match("hexa-41"),
            Some(("hexa-", PrefixKind::Unicode))
        );
        assert_eq!(
            registry.longest_match("hex-41"),
            Some(("hex-", PrefixKind::HexColor))
        );
    }

    #[test]
    fn test_excluding_a_kind() {
        let registry = PrefixRegistry::default();
        assert_eq!(
            registry.longest_match_excluding("str-x", Some(PrefixKind::Quoted)),
            None
        );
    }

    #[test]
    fn test_bare_marker() {
        let registry = PrefixRegistry::default();
        assert!(registry.is_bare_marker("var"));
        assert!(!registry.is_bare_marker("calc"));
    }
}
