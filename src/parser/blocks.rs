//! Keyframes (`kf-`) and font-face (`fface-`) parts
//!
//! Both are underscore-separated streams. Values use the same consumption rules
//! as ordinary values, so `fn-...close` and template arguments stay together.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::{FONT_FACE_MARKER, KEYFRAMES_MARKER, VALUE_SEPARATOR};
use crate::cursor::TokenCursor;
use crate::resolver::{Expansion, ValueResolver};

static PERCENT_FRAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+p$").unwrap());

/// A parsed `@keyframes` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyframes {
    pub name: String,
    pub frames: Vec<(String, Vec<String>)>,
}

impl Keyframes {
    pub fn to_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);
        for (selector, declarations) in &self.frames {
            css.push_str(&format!("  {} {{ {} }}\n", selector, declarations.join("; ")));
        }
        css.push('}');
        css
    }
}

fn frame_selector(token: &str) -> Option<String> {
    match token {
        "from" | "to" => Some(token.to_string()),
        _ if PERCENT_FRAME.is_match(token) => Some(token.replacen('p', "%", 1)),
        _ => None,
    }
}

/// Parsed `@keyframes` block, or `None` when the part names no animation.
pub fn parse_keyframes(
    part: &str,
    resolver: &ValueResolver<'_>,
    expansion: &mut Expansion,
) -> Option<Keyframes> {
    let mut cursor = TokenCursor::split(part, VALUE_SEPARATOR);
    let name = cursor
        .next_token()
        .and_then(|head| head.strip_prefix(KEYFRAMES_MARKER))
        .unwrap_or_default()
        .to_string();
    if name.is_empty() {
        log::debug!("Dropping keyframes without a name: '{}'", part);
        return None;
    }

    let mut frames: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut current: Option<String> = None;

    while let Some(token) = cursor.next_token() {
        if let Some(selector) = frame_selector(token) {
            frames.entry(selector.clone()).or_default();
            current = Some(selector);
            continue;
        }
        let Some(selector) = current.as_ref() else {
            log::debug!("Skipping '{}' before any frame selector in '{}'", token, part);
            continue;
        };
        let Some(value) = resolver.consume_value(&mut cursor, expansion) else {
            break;
        };
        if value.is_empty() {
            continue;
        }
        let declarations = frames.entry(selector.clone()).or_default();
        for property in resolver.lexicon().properties_for(token) {
            declarations.push(format!("{}: {}", property, value));
        }
    }

    Some(Keyframes {
        name,
        frames: frames.into_iter().collect(),
    })
}

/// Serialized `@font-face` block, or `None` when the part names no family.
pub fn parse_font_face(
    part: &str,
    resolver: &ValueResolver<'_>,
    expansion: &mut Expansion,
) -> Option<String> {
    let mut cursor = TokenCursor::split(part, VALUE_SEPARATOR);
    let family = cursor
        .next_token()
        .and_then(|head| head.strip_prefix(FONT_FACE_MARKER))
        .unwrap_or_default();
    if family.is_empty() {
        log::debug!("Dropping font face without a family: '{}'", part);
        return None;
    }

    let mut declarations = vec![format!("font-family: \"{}\"", family)];
    while let Some(property) = cursor.next_token() {
        let Some(value) = resolver.consume_value(&mut cursor, expansion) else {
            break;
        };
        for property in resolver.lexicon().properties_for(property) {
            declarations.push(format!("{}: {}", property, value));
        }
    }

    Some(format!("@font-face {{\n  {};\n}}", declarations.join(";\n  ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::testing::FixedAmbient;
    use crate::lexicon::Lexicon;
    use pretty_assertions::assert_eq;

    fn try_keyframes(part: &str) -> Option<Keyframes> {
        let lexicon = Lexicon::new();
        let resolver = ValueResolver::new(&lexicon, &FixedAmbient);
        parse_keyframes(part, &resolver, &mut Expansion::new("cssf--test"))
    }

    fn keyframes(part: &str) -> Keyframes {
        try_keyframes(part).unwrap()
    }

    fn try_font_face(part: &str) -> Option<String> {
        let lexicon = Lexicon::new();
        let resolver = ValueResolver::new(&lexicon, &FixedAmbient);
        parse_font_face(part, &resolver, &mut Expansion::new("cssf--test"))
    }

    fn font_face(part: &str) -> String {
        try_font_face(part).unwrap()
    }

    #[test]
    fn test_keyframes_from_to() {
        let block = keyframes("kf-fade_from_opacity_0_to_opacity_1");
        assert_eq!(block.name, "fade");
        assert_eq!(
            block.to_css(),
            "@keyframes fade {\n  from { opacity: 0 }\n  to { opacity: 1 }\n}"
        );
    }

    #[test]
    fn test_keyframes_percent_frames_and_functions() {
        let block = keyframes("kf-slide_0p_transform_fn-translateX_n100p_close_100p_transform_none");
        assert_eq!(
            block.to_css(),
            "@keyframes slide {\n  0% { transform: translateX(-100%) }\n  100% { transform: none }\n}"
        );
    }

    #[test]
    fn test_keyframes_aliases_and_multiple_declarations() {
        let block = keyframes("kf-pulse_50p_op_5div10_bgc_hex-f00");
        assert_eq!(
            block.frames,
            vec![(
                "50%".to_string(),
                vec!["opacity: 0.5".to_string(), "background-color: #f00".to_string()]
            )]
        );
    }

    #[test]
    fn test_keyframes_ignores_tokens_before_first_frame() {
        let block = keyframes("kf-x_opacity_from_opacity_0");
        assert_eq!(block.to_css(), "@keyframes x {\n  from { opacity: 0 }\n}");
    }

    #[test]
    fn test_font_face() {
        assert_eq!(
            font_face("fface-Inter_src_fn-url_str-inter.woff2_close_font-weight_400"),
            "@font-face {\n  font-family: \"Inter\";\n  src: url(\"inter.woff2\");\n  font-weight: 400;\n}"
        );
    }

    #[test]
    fn test_font_face_dangling_property() {
        assert_eq!(
            font_face("fface-Mono_font-display"),
            "@font-face {\n  font-family: \"Mono\";\n}"
        );
    }

    #[test]
    fn test_unnamed_blocks_are_dropped() {
        assert_eq!(try_keyframes("kf-"), None);
        assert_eq!(try_keyframes("kf-_from_opacity_0"), None);
        assert_eq!(try_font_face("fface-"), None);
        assert_eq!(try_font_face("fface-_font-weight_400"), None);
    }
}
