//! Accumulated rules, keyed so repeated classes overwrite instead of duplicating

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::parser::{ParseContext, RootDeclaration};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub declarations: Vec<String>,
    pub important: bool,
}

/// Selector to rule, in first-insertion order.
pub type RuleMap = IndexMap<String, Rule>;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RuleStore {
    root: IndexSet<RootDeclaration>,
    font_faces: IndexSet<String>,
    keyframes: IndexMap<String, String>,
    base: RuleMap,
    at_rules: IndexMap<String, RuleMap>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed class into the store.
    pub fn insert(&mut self, context: ParseContext) {
        for root in context.root_rules {
            self.root.insert(root);
        }

        if let Some(keyframes) = context.keyframes {
            self.keyframes.insert(keyframes.name.clone(), keyframes.to_css());
        }

        if let Some(font_face) = context.font_face {
            self.font_faces.insert(font_face);
        }

        if context.declarations.is_empty() {
            return;
        }

        let rule = Rule {
            declarations: context.declarations,
            important: context.important,
        };
        let rules = match context.at_rule {
            Some(at_rule) => self.at_rules.entry(at_rule).or_default(),
            None => &mut self.base,
        };
        rules.insert(context.selector, rule);
    }

    pub fn root_declarations(&self) -> &IndexSet<RootDeclaration> {
        &self.root
    }

    pub fn font_faces(&self) -> &IndexSet<String> {
        &self.font_faces
    }

    /// Animation name to serialized block.
    pub fn keyframes(&self) -> &IndexMap<String, String> {
        &self.keyframes
    }

    pub fn base_rules(&self) -> &RuleMap {
        &self.base
    }

    pub fn at_rule_groups(&self) -> &IndexMap<String, RuleMap> {
        &self.at_rules
    }

    /// Number of selector rules, grouped ones included.
    pub fn rule_count(&self) -> usize {
        self.base.len() + self.at_rules.values().map(IndexMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
            && self.font_faces.is_empty()
            && self.keyframes.is_empty()
            && self.base.is_empty()
            && self.at_rules.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_RECURSION_DEPTH;
    use crate::lexicon::testing::FixedAmbient;
    use crate::lexicon::Lexicon;
    use crate::parser::ClassParser;

    fn store_of(classes: &[&str]) -> RuleStore {
        let lexicon = Lexicon::new();
        let parser = ClassParser::new(&lexicon, &FixedAmbient, MAX_RECURSION_DEPTH);
        let mut store = RuleStore::new();
        for class_name in classes {
            if let Some(context) = parser.parse(class_name).unwrap() {
                store.insert(context);
            }
        }
        store
    }

    #[test]
    fn test_base_and_grouped_rules() {
        let store = store_of(&["cssf--c_red", "cssf--c_blue--mq768"]);
        assert_eq!(store.base_rules().len(), 1);
        assert_eq!(store.at_rule_groups().len(), 1);
        assert_eq!(store.rule_count(), 2);
        let group = &store.at_rule_groups()["@media (min-width: 768px)"];
        assert!(group.contains_key(".cssf--c_blue--mq768"));
    }

    #[test]
    fn test_same_selector_last_write_wins() {
        let lexicon = Lexicon::new();
        let parser = ClassParser::new(&lexicon, &FixedAmbient, MAX_RECURSION_DEPTH);
        let mut store = RuleStore::new();
        let mut first = parser.parse("cssf--c_red").unwrap().unwrap();
        store.insert(first.clone());
        first.declarations = vec!["color: green".to_string()];
        store.insert(first);
        assert_eq!(store.base_rules().len(), 1);
        assert_eq!(
            store.base_rules()[".cssf--c_red"].declarations,
            vec!["color: green"]
        );
    }

    #[test]
    fn test_root_declarations_deduplicate() {
        let store = store_of(&["cssf--rval-gap_4px", "cssf--rval-gap_4px"]);
        assert_eq!(store.root_declarations().len(), 1);
        assert!(store.base_rules().is_empty());
    }

    #[test]
    fn test_keyframes_keyed_by_name() {
        let store = store_of(&[
            "cssf--kf-fade_from_opacity_0",
            "cssf--kf-fade_to_opacity_1",
        ]);
        assert_eq!(store.keyframes().len(), 1);
        assert!(store.keyframes()["fade"].contains("to { opacity: 1 }"));
    }

    #[test]
    fn test_clear() {
        let mut store = store_of(&["cssf--c_red", "cssf--fface-Inter_font-weight_400"]);
        assert!(!store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }
}
