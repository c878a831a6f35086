//! Target-selector rewriting for `tar-` instructions
//!
//! The instruction stream is dash-separated and read left to right:
//!
//! - `pc-<name>` / `pe-<name>`: pseudo-class / pseudo-element
//! - `parent-<type>-<name>`: ancestor prefix (`.name <selector>`)
//! - `self-<type>-<name>`: compound with the element's own class (`.name.own`)
//! - `next-<type>-<name>` / `child-<type>-<name>`: `+` / `>` combinators
//! - `all`: universal descendant
//! - `<type>-<name>`: plain descendant
//!
//! `<type>` is `class`, `tag` or `id`. Names may span several tokens and end at
//! the next reserved instruction word.

use crate::constants::SELECTOR_SEPARATOR;
use crate::cursor::TokenCursor;

const INSTRUCTIONS: &[&str] = &[
    "pc", "pe", "parent", "self", "next", "child", "all", "tag", "class", "id",
];

pub fn is_instruction(token: &str) -> bool {
    INSTRUCTIONS.contains(&token)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectorType {
    Class,
    Tag,
    Id,
}

impl SelectorType {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "class" => Some(SelectorType::Class),
            "tag" => Some(SelectorType::Tag),
            "id" => Some(SelectorType::Id),
            _ => None,
        }
    }

    fn render(self, name: &str) -> String {
        match self {
            SelectorType::Class => format!(".{}", name),
            SelectorType::Tag => name.to_string(),
            SelectorType::Id => format!("#{}", name),
        }
    }
}

/// Escape characters that would break a class selector.
pub fn escape_class_name(class_name: &str) -> String {
    let mut escaped = String::with_capacity(class_name.len());
    for c in class_name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            escaped.push(c);
        } else {
            escaped.push('\\');
            escaped.push(c);
        }
    }
    escaped
}

/// Selector for an element carrying `class_name`.
pub fn class_selector(class_name: &str) -> String {
    format!(".{}", escape_class_name(class_name))
}

/// Consume `<type>-<name...>`. Needs at least two tokens left.
fn take_typed_name(cursor: &mut TokenCursor<'_>) -> Option<(Option<SelectorType>, String)> {
    if cursor.remaining() < 2 {
        return None;
    }
    let kind = cursor.next_token().and_then(SelectorType::from_token);
    let name = cursor.take_name(is_instruction).join("-");
    Some((kind, name))
}

/// Rewrite the selector of `original_class` according to `instructions`
/// (the part of a `tar-` token after its marker).
pub fn rewrite_selector(instructions: &str, original_class: &str) -> String {
    let own = class_selector(original_class);
    let mut selector = own.clone();
    let mut parent_prefix = String::new();
    let mut cursor = TokenCursor::split(instructions, SELECTOR_SEPARATOR);

    while let Some(token) = cursor.next_token() {
        match token {
            "pc" => {
                if let Some(pseudo) = cursor.next_token() {
                    selector.push(':');
                    selector.push_str(pseudo);
                }
            }
            "pe" => {
                if let Some(pseudo) = cursor.next_token() {
                    selector.push_str("::");
                    selector.push_str(pseudo);
                }
            }
            "parent" => {
                if let Some((Some(kind), name)) = take_typed_name(&mut cursor) {
                    parent_prefix = format!("{} ", kind.render(&name));
                }
            }
            "self" => {
                if let Some((Some(kind), name)) = take_typed_name(&mut cursor) {
                    selector = format!("{}{}", kind.render(&name), own);
                }
            }
            "next" | "child" => {
                let combinator = if token == "next" { " + " } else { " > " };
                if let Some((Some(kind), name)) = take_typed_name(&mut cursor) {
                    selector.push_str(combinator);
                    selector.push_str(&kind.render(&name));
                }
            }
            "all" => selector.push_str(" *"),
            "tag" | "class" | "id" => {
                if !cursor.is_done() {
                    let name = cursor.take_name(is_instruction).join("-");
                    if let Some(kind) = SelectorType::from_token(token) {
                        selector.push(' ');
                        selector.push_str(&kind.render(&name));
                    }
                }
            }
            other => log::debug!("Ignoring unknown selector instruction '{}'", other),
        }
    }

    format!("{}{}", parent_prefix, selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASS: &str = "cssf--c_red";

    #[test]
    fn test_pseudo_class() {
        assert_eq!(
            rewrite_selector("pc-hover", "cssf--c_red--tar-pc-hover"),
            ".cssf--c_red--tar-pc-hover:hover"
        );
    }

    #[test]
    fn test_pseudo_element() {
        assert_eq!(rewrite_selector("pe-before", CLASS), ".cssf--c_red::before");
    }

    #[test]
    fn test_parent_prefix_with_hyphenated_name() {
        assert_eq!(
            rewrite_selector("parent-class-main-nav-pc-hover", CLASS),
            ".main-nav .cssf--c_red:hover"
        );
        assert_eq!(
            rewrite_selector("parent-id-app", CLASS),
            "#app .cssf--c_red"
        );
    }

    #[test]
    fn test_self_compound() {
        assert_eq!(
            rewrite_selector("self-class-is-active", CLASS),
            ".is-active.cssf--c_red"
        );
        assert_eq!(rewrite_selector("self-tag-a", CLASS), "a.cssf--c_red");
    }

    #[test]
    fn test_combinators() {
        assert_eq!(
            rewrite_selector("next-tag-p", CLASS),
            ".cssf--c_red + p"
        );
        assert_eq!(
            rewrite_selector("child-class-item-title", CLASS),
            ".cssf--c_red > .item-title"
        );
    }

    #[test]
    fn test_descendants_and_universal() {
        assert_eq!(rewrite_selector("all", CLASS), ".cssf--c_red *");
        assert_eq!(
            rewrite_selector("tag-li-pc-hover", CLASS),
            ".cssf--c_red li:hover"
        );
        assert_eq!(rewrite_selector("id-hero-image", CLASS), ".cssf--c_red #hero-image");
    }

    #[test]
    fn test_incomplete_instructions_are_ignored() {
        assert_eq!(rewrite_selector("pc", CLASS), ".cssf--c_red");
        assert_eq!(rewrite_selector("next-tag", CLASS), ".cssf--c_red");
        assert_eq!(rewrite_selector("bogus-pc-focus", CLASS), ".cssf--c_red:focus");
    }

    #[test]
    fn test_escape_class_name() {
        assert_eq!(escape_class_name("cssf--w_50.5p"), "cssf--w_50\\.5p");
        assert_eq!(class_selector("cssf--p10"), ".cssf--p10");
    }
}
