//! Value resolution: turns value tokens into CSS text
//!
//! A token is dispatched to the handler whose prefix marker is the longest
//! literal prefix of the token. Tokens without a marker are numeric (unit table
//! applies) or literal.
//!
//! Recursive entry points (templates, function arguments, quoted strings) all
//! go through the same [`Expansion`] depth counter as template part expansion
//! in the class parser, so a self-referencing template always terminates.

use serde::Serialize;

use crate::constants::{CLOSE_SENTINEL, GLUE_PREFIX, MAX_RECURSION_DEPTH, VALUE_SEPARATOR};
use crate::cursor::TokenCursor;
use crate::lexicon::{Ambient, Lexicon, PrefixKind};
use crate::selector::rewrite_selector;
use crate::units::{convert_numeric, is_numeric};

/// Custom property recorded while resolving an `rval-` value token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootValue {
    pub name: String,
    pub value: String,
}

/// Per-class expansion state threaded through every recursive call.
#[derive(Debug, Clone)]
pub struct Expansion {
    origin: String,
    depth: usize,
    max_depth: usize,
    limit_hit: bool,
    root_values: Vec<RootValue>,
}

impl Expansion {
    pub fn new(origin: impl Into<String>) -> Self {
        Self::with_max_depth(origin, MAX_RECURSION_DEPTH)
    }

    pub fn with_max_depth(origin: impl Into<String>, max_depth: usize) -> Self {
        Self {
            origin: origin.into(),
            depth: 0,
            max_depth,
            limit_hit: false,
            root_values: Vec::new(),
        }
    }

    /// Class name the expansion belongs to.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn limit_hit(&self) -> bool {
        self.limit_hit
    }

    /// Go one level deeper. Returns false once the ceiling is reached; the
    /// caller must then stop expanding and keep what it has.
    pub fn enter(&mut self) -> bool {
        if self.depth >= self.max_depth {
            if !self.limit_hit {
                log::warn!(
                    "Max template recursion depth ({}) exceeded for class \"{}\". Aborting template expansion.",
                    self.max_depth,
                    self.origin
                );
            }
            self.limit_hit = true;
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn push_root_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.root_values.push(RootValue {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn take_root_values(&mut self) -> Vec<RootValue> {
        std::mem::take(&mut self.root_values)
    }
}

pub struct ValueResolver<'a> {
    lexicon: &'a Lexicon,
    ambient: &'a dyn Ambient,
}

impl<'a> ValueResolver<'a> {
    pub fn new(lexicon: &'a Lexicon, ambient: &'a dyn Ambient) -> Self {
        Self { lexicon, ambient }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Resolve a single token (which may carry `_`-joined arguments).
    pub fn resolve(&self, token: &str, expansion: &mut Expansion) -> String {
        self.resolve_excluding(token, None, expansion)
    }

    fn resolve_excluding(
        &self,
        token: &str,
        excluded: Option<PrefixKind>,
        expansion: &mut Expansion,
    ) -> String {
        if token.is_empty() {
            return String::new();
        }
        match self
            .lexicon
            .prefixes()
            .longest_match_excluding(token, excluded)
        {
            Some((prefix, kind)) => {
                let rest = &token[prefix.len()..];
                self.dispatch(kind, token, rest, expansion)
            }
            // Inside quotes only marker handlers apply.
            None if excluded.is_some() => token.to_string(),
            None => convert_numeric(token),
        }
    }

    fn dispatch(
        &self,
        kind: PrefixKind,
        token: &str,
        rest: &str,
        expansion: &mut Expansion,
    ) -> String {
        match kind {
            PrefixKind::HexColor => format!("#{}", rest),
            PrefixKind::VarReference => format!("var(--{})", rest),
            PrefixKind::CustomPropertyName => format!("--{}", rest),
            PrefixKind::RootValue => self.resolve_root_value(rest, expansion),
            PrefixKind::Template => self.resolve_template(token, rest, expansion),
            PrefixKind::Character => self.lexicon.char_for(rest).unwrap_or(rest).to_string(),
            PrefixKind::Unicode => format!("\\{}", rest),
            PrefixKind::Quoted => {
                if !expansion.enter() {
                    return token.to_string();
                }
                let inner = self.resolve_excluding(rest, Some(PrefixKind::Quoted), expansion);
                expansion.leave();
                format!("\"{}\"", inner)
            }
            PrefixKind::Group => format!("({}),", rest),
            PrefixKind::Target => rewrite_selector(rest, expansion.origin()),
            PrefixKind::Function => self.resolve_function(token, rest, expansion),
            PrefixKind::CustomFunction => self.resolve_custom_function(token, rest, expansion),
        }
    }

    /// Resolve a `_`-separated value stream and join the results with spaces.
    pub fn resolve_sequence(&self, value: &str, expansion: &mut Expansion) -> String {
        let mut cursor = TokenCursor::split(value, VALUE_SEPARATOR);
        self.resolve_stream(&mut cursor, expansion)
    }

    /// Resolve every remaining value in `cursor`. Glue tokens (`chrsl-<name>`)
    /// attach their character to the previous and the next value without spaces.
    pub fn resolve_stream(&self, cursor: &mut TokenCursor<'_>, expansion: &mut Expansion) -> String {
        let mut pieces: Vec<String> = Vec::new();
        let mut attach_next = false;

        while let Some(token) = cursor.peek() {
            let (value, glue) = match token.strip_prefix(GLUE_PREFIX) {
                Some(name) => {
                    cursor.next_token();
                    (self.lexicon.char_for(name).unwrap_or(name).to_string(), true)
                }
                None => match self.consume_value(cursor, expansion) {
                    Some(value) => (value, false),
                    None => break,
                },
            };

            match pieces.last_mut() {
                Some(last) if attach_next || glue => last.push_str(&value),
                _ => pieces.push(value),
            }
            attach_next = glue;
        }

        pieces.join(" ")
    }

    /// Consume and resolve one value from `cursor`.
    ///
    /// Function tokens take everything through the `close` sentinel (or the rest
    /// of the stream); template tokens take as many arguments as their arity;
    /// root values take their value token.
    pub fn consume_value(
        &self,
        cursor: &mut TokenCursor<'_>,
        expansion: &mut Expansion,
    ) -> Option<String> {
        let token = cursor.next_token()?;

        let chunk = match self.lexicon.prefixes().longest_match(token) {
            Some((_, PrefixKind::Function | PrefixKind::CustomFunction)) => {
                let (arguments, _) = cursor.take_through(CLOSE_SENTINEL);
                join_chunk(token, &arguments)
            }
            Some((prefix, PrefixKind::Template)) => {
                let arity = self
                    .lexicon
                    .template(&token[prefix.len()..])
                    .map_or(0, |template| template.arity());
                let arguments = cursor.take(arity);
                join_chunk(token, &arguments)
            }
            Some((_, PrefixKind::RootValue)) => join_chunk(token, &cursor.take(1)),
            _ => token.to_string(),
        };

        Some(self.resolve(&chunk, expansion))
    }

    fn resolve_root_value(&self, rest: &str, expansion: &mut Expansion) -> String {
        let (name, value) = match rest.split_once(VALUE_SEPARATOR) {
            Some((name, value)) => (name, Some(value)),
            None => (rest, None),
        };
        if let Some(value) = value {
            let resolved = self.resolve_sequence(value, expansion);
            expansion.push_root_value(name, resolved);
        }
        format!("var(--{})", name)
    }

    fn resolve_template(&self, token: &str, rest: &str, expansion: &mut Expansion) -> String {
        let (name, params) = match rest.split_once(VALUE_SEPARATOR) {
            Some((name, params)) => (name, params),
            None => (rest, ""),
        };
        let Some(template) = self.lexicon.template(name) else {
            log::debug!("Unknown template '{}' in value '{}'", name, token);
            return token.to_string();
        };
        if params.is_empty() {
            return template.blueprint().to_string();
        }
        if !expansion.enter() {
            return token.to_string();
        }
        let arguments: Vec<String> = params
            .split(VALUE_SEPARATOR)
            .map(|param| self.resolve(param, expansion))
            .collect();
        expansion.leave();
        template.substitute(&arguments)
    }

    fn resolve_function(&self, token: &str, rest: &str, expansion: &mut Expansion) -> String {
        let Some((name, params)) = rest.split_once(VALUE_SEPARATOR) else {
            return token.to_string();
        };
        if name.is_empty() || params.is_empty() {
            return token.to_string();
        }
        if !expansion.enter() {
            return token.to_string();
        }

        let mut arguments = String::new();
        let mut trailing = String::new();
        let mut found_close = false;
        let mut attach_next = false;

        for param in params.split(VALUE_SEPARATOR) {
            if param == CLOSE_SENTINEL {
                found_close = true;
                attach_next = false;
                continue;
            }

            let (value, glue) = match param.strip_prefix(GLUE_PREFIX) {
                Some(char_name) => (
                    self.lexicon.char_for(char_name).unwrap_or(char_name).to_string(),
                    true,
                ),
                None if found_close => (self.resolve(param, expansion), false),
                None => (self.resolve_argument(param, expansion), false),
            };

            if found_close {
                trailing.push(' ');
                trailing.push_str(&value);
            } else {
                if !arguments.is_empty() && !attach_next && !glue {
                    arguments.push(' ');
                }
                arguments.push_str(&value);
                attach_next = glue;
            }
        }

        expansion.leave();
        format!("{}({}){}", name, arguments, trailing)
    }

    /// Resolve one function argument. Marker tokens and negative numbers resolve
    /// whole; anything else is dash-split into a comma list (`12-1fr` -> `12, 1fr`).
    fn resolve_argument(&self, argument: &str, expansion: &mut Expansion) -> String {
        let prefixes = self.lexicon.prefixes();
        let negative_number =
            argument.starts_with('-') && is_numeric(argument) && !argument[1..].contains('-');
        if negative_number || prefixes.longest_match(argument).is_some() {
            return self.resolve(argument, expansion);
        }

        let mut pieces = Vec::new();
        let mut cursor = TokenCursor::split(argument, '-');
        while let Some(piece) = cursor.next_token() {
            if prefixes.is_bare_marker(piece) {
                if let Some(next) = cursor.next_token() {
                    pieces.push(self.resolve(&format!("{}-{}", piece, next), expansion));
                    continue;
                }
            }
            pieces.push(self.resolve(piece, expansion));
        }
        pieces.join(", ")
    }

    fn resolve_custom_function(
        &self,
        token: &str,
        rest: &str,
        expansion: &mut Expansion,
    ) -> String {
        let (name, params) = match rest.split_once(VALUE_SEPARATOR) {
            Some((name, params)) => (name, params),
            None => (rest, ""),
        };
        let Some(function) = self.lexicon.function(name) else {
            log::debug!("Unknown custom function '{}' in value '{}'", name, token);
            return token.to_string();
        };
        if !expansion.enter() {
            return token.to_string();
        }

        let mut arguments = Vec::new();
        let mut trailing = String::new();
        let mut found_close = false;
        for param in params.split(VALUE_SEPARATOR).filter(|p| !p.is_empty()) {
            if param == CLOSE_SENTINEL {
                found_close = true;
                continue;
            }
            let value = self.resolve(param, expansion);
            if found_close {
                trailing.push(' ');
                trailing.push_str(&value);
            } else {
                arguments.push(value);
            }
        }
        expansion.leave();

        match function(&arguments, self.ambient) {
            Some(result) => format!("{}{}", result, trailing),
            None => {
                log::debug!("Custom function '{}' could not use arguments {:?}", name, arguments);
                token.to_string()
            }
        }
    }
}

fn join_chunk(head: &str, tail: &[&str]) -> String {
    let mut chunk = head.to_string();
    for token in tail {
        chunk.push(VALUE_SEPARATOR);
        chunk.push_str(token);
    }
    chunk
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::testing::FixedAmbient;

    fn resolve(token: &str) -> String {
        let lexicon = Lexicon::new();
        let resolver = ValueResolver::new(&lexicon, &FixedAmbient);
        resolver.resolve(token, &mut Expansion::new("cssf--test"))
    }

    fn sequence(value: &str) -> String {
        let lexicon = Lexicon::new();
        let resolver = ValueResolver::new(&lexicon, &FixedAmbient);
        resolver.resolve_sequence(value, &mut Expansion::new("cssf--test"))
    }

    #[test]
    fn test_simple_markers() {
        assert_eq!(resolve("hex-ff0000"), "#ff0000");
        assert_eq!(resolve("var-brand"), "var(--brand)");
        assert_eq!(resolve("val-brand"), "--brand");
        assert_eq!(resolve("uni-201C"), "\\201C");
        assert_eq!(resolve("group-h1"), "(h1),");
        assert_eq!(resolve("chr-slash"), "/");
        assert_eq!(resolve("chr-unknown"), "unknown");
    }

    #[test]
    fn test_numeric_and_literal_fallback() {
        assert_eq!(resolve("20px"), "20px");
        assert_eq!(resolve("n20px"), "-20px");
        assert_eq!(resolve("50p"), "50%");
        assert_eq!(resolve("32pxrem"), "2rem");
        assert_eq!(resolve("solid"), "solid");
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn test_longest_registered_prefix_fires() {
        let mut lexicon = Lexicon::new();
        lexicon.prefixes_mut().register("he-", PrefixKind::Unicode);
        lexicon.prefixes_mut().register("hexa-", PrefixKind::CustomPropertyName);
        let resolver = ValueResolver::new(&lexicon, &FixedAmbient);
        let mut expansion = Expansion::new("cssf--test");
        assert_eq!(resolver.resolve("he-41", &mut expansion), "\\41");
        assert_eq!(resolver.resolve("hex-41", &mut expansion), "#41");
        assert_eq!(resolver.resolve("hexa-41", &mut expansion), "--41");
    }

    #[test]
    fn test_quoted_string_resolves_inner_once() {
        assert_eq!(resolve("str-"), "\"\"");
        assert_eq!(resolve("str-chr-star"), "\"*\"");
        assert_eq!(resolve("str-uni-2014"), "\"\\2014\"");
        assert_eq!(resolve("str-str-x"), "\"str-x\"");
        assert_eq!(resolve("str-hello"), "\"hello\"");
    }

    #[test]
    fn test_template_value_with_arguments() {
        assert_eq!(resolve("tpl-rgba_0_0_0_50div100"), "rgba(0, 0, 0, 0.5)");
        assert_eq!(resolve("tpl-translate_-50p_-50p"), "translate(-50% -50%)");
        assert_eq!(resolve("tpl-rgb"), "rgb(§0, §1, §2)");
        assert_eq!(resolve("tpl-missing_1"), "tpl-missing_1");
    }

    #[test]
    fn test_function_with_close_and_trailing_tokens() {
        assert_eq!(resolve("fn-calc_100p_chr-slash_5"), "calc(100% / 5)");
        assert_eq!(resolve("fn-repeat_12-1fr"), "repeat(12, 1fr)");
        assert_eq!(resolve("fn-translateX_n50p"), "translateX(-50%)");
        assert_eq!(
            resolve("fn-calc_100p_chr-minus_20px_close_auto"),
            "calc(100% - 20px) auto"
        );
        assert_eq!(resolve("fn-min_var-gap-10px"), "min(var(--gap-10px))");
        assert_eq!(resolve("fn-noargs"), "fn-noargs");
    }

    #[test]
    fn test_function_argument_dash_split_rejoins_markers() {
        assert_eq!(resolve("fn-max_1rem-var-gap"), "max(1rem, var(--gap))");
        assert_eq!(resolve("fn-translate_-50p"), "translate(-50%)");
    }

    #[test]
    fn test_function_glue() {
        assert_eq!(
            resolve("fn-calc_100p_chr-minus_10_chrsl-percent"),
            "calc(100% - 10%)"
        );
    }

    #[test]
    fn test_custom_functions() {
        assert_eq!(resolve("cfn-year"), "2024");
        assert_eq!(resolve("cfn-px-to-rem_24px"), "1.5rem");
        assert_eq!(
            resolve("cfn-clamp_16px_32px_1600px_close"),
            "clamp(1.0000rem, 1.0000rem + 1.0000vw, 2.0000rem)"
        );
        assert_eq!(resolve("cfn-nope_1"), "cfn-nope_1");
        assert_eq!(resolve("cfn-px-to-rem"), "cfn-px-to-rem");
    }

    #[test]
    fn test_target_marker_rewrites_selector_of_origin() {
        assert_eq!(resolve("tar-pc-hover"), ".cssf--test:hover");
    }

    #[test]
    fn test_root_value_records_declaration() {
        let lexicon = Lexicon::new();
        let resolver = ValueResolver::new(&lexicon, &FixedAmbient);
        let mut expansion = Expansion::new("cssf--test");
        assert_eq!(
            resolver.resolve("rval-gap_20px", &mut expansion),
            "var(--gap)"
        );
        assert_eq!(
            expansion.take_root_values(),
            vec![RootValue {
                name: "gap".to_string(),
                value: "20px".to_string()
            }]
        );
    }

    #[test]
    fn test_sequence_joins_with_spaces() {
        assert_eq!(sequence("1px_solid_hex-000"), "1px solid #000");
        assert_eq!(sequence(""), "");
    }

    #[test]
    fn test_sequence_consumes_template_arity() {
        assert_eq!(
            sequence("tpl-rgba_0_0_0_50div100_fixed"),
            "rgba(0, 0, 0, 0.5) fixed"
        );
        assert_eq!(sequence("tpl-rgb_1_2"), "rgb(1, 2, §2)");
    }

    #[test]
    fn test_sequence_consumes_function_through_close() {
        assert_eq!(
            sequence("fn-calc_100p_chr-slash_4_close_hex-fff"),
            "calc(100% / 4) #fff"
        );
        assert_eq!(sequence("fn-calc_100p_chr-slash_4"), "calc(100% / 4)");
    }

    #[test]
    fn test_sequence_root_value_takes_its_value() {
        let lexicon = Lexicon::new();
        let resolver = ValueResolver::new(&lexicon, &FixedAmbient);
        let mut expansion = Expansion::new("cssf--test");
        assert_eq!(
            resolver.resolve_sequence("rval-w_10px_solid", &mut expansion),
            "var(--w) solid"
        );
        assert_eq!(expansion.take_root_values()[0].value, "10px");
    }

    #[test]
    fn test_sequence_glue_attaches_both_sides() {
        assert_eq!(sequence("10_chrsl-slash_20_auto"), "10/20 auto");
        assert_eq!(sequence("chrsl-star_5"), "*5");
    }

    #[test]
    fn test_expansion_depth_ceiling() {
        let mut expansion = Expansion::with_max_depth("cssf--loop", 2);
        assert!(expansion.enter());
        assert!(expansion.enter());
        assert!(!expansion.enter());
        assert!(expansion.limit_hit());
        expansion.leave();
        assert_eq!(expansion.depth(), 1);
    }

    #[test]
    fn test_nested_value_expansion_stops_at_ceiling() {
        let lexicon = Lexicon::new();
        let resolver = ValueResolver::new(&lexicon, &FixedAmbient);
        let mut expansion = Expansion::with_max_depth("cssf--deep", 1);
        assert_eq!(
            resolver.resolve("fn-calc_str-x", &mut expansion),
            "calc(str-x)"
        );
        assert!(expansion.limit_hit());
        assert_eq!(expansion.depth(), 0);
    }
}
