//! Stylesheet serialization
//!
//! Output order is structural: root declarations, font faces, keyframes, base
//! rules, then at-rule groups sorted by kind and breakpoint.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

use crate::constants::{IMPORTANT_SUFFIX, STYLE_ELEMENT_ID};
use crate::store::{Rule, RuleMap, RuleStore};

static MIN_WIDTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(min-width:\s*(\d+)px\)").unwrap());
static MAX_WIDTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(max-width:\s*(\d+)px\)").unwrap());

/// Sort key for the width an at-rule applies at. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Breakpoint {
    Min(u64),
    Max(u64),
    Unbounded,
}

impl Breakpoint {
    fn of(at_rule: &str) -> Self {
        let width = |re: &Regex| {
            re.captures(at_rule)
                .and_then(|caps| caps[1].parse::<u64>().ok())
        };
        if let Some(px) = width(&MIN_WIDTH) {
            Breakpoint::Min(px)
        } else if let Some(px) = width(&MAX_WIDTH) {
            Breakpoint::Max(px)
        } else {
            Breakpoint::Unbounded
        }
    }
}

fn group_rank(at_rule: &str) -> u8 {
    if at_rule.starts_with("@media") {
        0
    } else if at_rule.starts_with("@container") {
        1
    } else {
        2
    }
}

/// Media before container before anything else, then narrow-first by
/// breakpoint (`max-width` after every `min-width`), then text.
pub fn compare_at_rules(a: &str, b: &str) -> Ordering {
    group_rank(a)
        .cmp(&group_rank(b))
        .then_with(|| Breakpoint::of(a).cmp(&Breakpoint::of(b)))
        .then_with(|| a.cmp(b))
}

pub fn sort_at_rules<'s>(at_rules: impl IntoIterator<Item = &'s str>) -> Vec<&'s str> {
    let mut sorted: Vec<&str> = at_rules.into_iter().collect();
    sorted.sort_by(|a, b| compare_at_rules(a, b));
    sorted
}

pub fn rule_to_css(selector: &str, rule: &Rule) -> String {
    let suffix = if rule.important { IMPORTANT_SUFFIX } else { "" };
    let mut css = format!("{} {{\n", selector);
    for declaration in &rule.declarations {
        css.push_str(&format!("  {}{};\n", declaration, suffix));
    }
    css.push('}');
    css
}

fn rules_in_order(rules: &RuleMap, canonical: bool) -> Vec<(&String, &Rule)> {
    let mut entries: Vec<(&String, &Rule)> = rules.iter().collect();
    if canonical {
        entries.sort_by(|a, b| a.0.cmp(b.0));
    }
    entries
}

fn sorted_if(mut chunks: Vec<String>, canonical: bool) -> Vec<String> {
    if canonical {
        chunks.sort();
    }
    chunks
}

/// Serialize the whole store. With `canonical` set, every section is sorted
/// so the text does not depend on discovery order.
pub fn build(store: &RuleStore, canonical: bool) -> String {
    let mut chunks: Vec<String> = Vec::new();

    let root = store.root_declarations().iter().map(|r| r.to_css()).collect();
    chunks.extend(sorted_if(root, canonical));

    let font_faces = store.font_faces().iter().cloned().collect();
    chunks.extend(sorted_if(font_faces, canonical));

    let keyframes = store.keyframes().values().cloned().collect();
    chunks.extend(sorted_if(keyframes, canonical));

    for (selector, rule) in rules_in_order(store.base_rules(), canonical) {
        chunks.push(rule_to_css(selector, rule));
    }

    let groups = store.at_rule_groups();
    for at_rule in sort_at_rules(groups.keys().map(String::as_str)) {
        let Some(rules) = groups.get(at_rule) else {
            continue;
        };
        if rules.is_empty() {
            continue;
        }
        let body = rules_in_order(rules, canonical)
            .into_iter()
            .map(|(selector, rule)| rule_to_css(selector, rule))
            .collect::<Vec<_>>()
            .join("\n");
        let indented = body
            .lines()
            .map(|line| format!("  {}", line))
            .collect::<Vec<_>>()
            .join("\n");
        chunks.push(format!("{} {{\n{}\n}}", at_rule, indented));
    }

    chunks.join("\n\n")
}

/// Wrap a stylesheet in the `<style>` element browser hosts update in place.
pub fn style_element(css: &str) -> String {
    format!("<style id=\"{}\">\n{}\n</style>", STYLE_ELEMENT_ID, css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_RECURSION_DEPTH;
    use crate::lexicon::testing::FixedAmbient;
    use crate::lexicon::Lexicon;
    use crate::parser::ClassParser;
    use pretty_assertions::assert_eq;

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
    fn test_single_rule() {
        let css = build(&store_of(&["cssf--bgc_hex-ff0000--p10"]), false);
        assert_eq!(
            css,
            ".cssf--bgc_hex-ff0000--p10 {\n  background-color: #ff0000 !important;\n  padding: 0.625rem !important;\n}"
        );
    }

    #[test]
    fn test_no_important() {
        let css = build(&store_of(&["cssf--c_red--ni"]), false);
        assert_eq!(css, ".cssf--c_red--ni {\n  color: red;\n}");
    }

    #[test]
    fn test_structural_section_order() {
        let css = build(
            &store_of(&[
                "cssf--c_red--mq768",
                "cssf--c_blue",
                "cssf--kf-fade_from_opacity_0",
                "cssf--fface-Inter_font-weight_400",
                "cssf--rval-gap_4px",
            ]),
            false,
        );
        let position = |needle: &str| css.find(needle).unwrap();
        assert!(position(":root") < position("@font-face"));
        assert!(position("@font-face") < position("@keyframes"));
        assert!(position("@keyframes") < position(".cssf--c_blue {"));
        assert!(position(".cssf--c_blue {") < position("@media"));
    }

    #[test]
    fn test_at_rule_block_is_indented() {
        let css = build(&store_of(&["cssf--c_red--mq768"]), false);
        assert_eq!(
            css,
            "@media (min-width: 768px) {\n  .cssf--c_red--mq768 {\n    color: red !important;\n  }\n}"
        );
    }

    #[test]
    fn test_at_rule_sorting() {
        let sorted = sort_at_rules(vec![
            "@supports (display: grid)",
            "@container (min-width: 300px)",
            "@media print",
            "@media (max-width: 480px)",
            "@media (min-width: 1024px)",
            "@media (min-width: 768px)",
            "@media (max-width: 320px)",
        ]);
        assert_eq!(
            sorted,
            vec![
                "@media (min-width: 768px)",
                "@media (min-width: 1024px)",
                "@media (max-width: 320px)",
                "@media (max-width: 480px)",
                "@media print",
                "@container (min-width: 300px)",
                "@supports (display: grid)",
            ]
        );
    }

    #[test]
    fn test_canonical_order_ignores_discovery_order() {
        let classes = [
            "cssf--c_red",
            "cssf--m4",
            "cssf--rval-b_1px",
            "cssf--rval-a_2px",
            "cssf--p2--mq600",
            "cssf--p1--mq600",
        ];
        let mut reversed = classes;
        reversed.reverse();
        assert_eq!(
            build(&store_of(&classes), true),
            build(&store_of(&reversed), true)
        );
        assert_ne!(
            build(&store_of(&classes), false),
            build(&store_of(&reversed), false)
        );
    }

    #[test]
    fn test_empty_store() {
        assert_eq!(build(&RuleStore::new(), false), "");
    }

    #[test]
    fn test_style_element() {
        assert_eq!(
            style_element("a {\n}"),
            "<style id=\"cssf-main\">\na {\n}\n</style>"
        );
    }
}
