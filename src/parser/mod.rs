//! Class name parser
//!
//! A class name is the scheme marker followed by `--`-separated parts. Each part
//! is classified by its leading marker and folded into a [`ParseContext`]:
//!
//! ```text
//! cssf--bgc_hex-ff0000--p10--mq768--tar-pc-hover
//!       └── default ──┘ └┬┘ └─┬─┘ └─ target ──┘
//!                    numeric  media
//! ```
//!
//! Template parts whose blueprint is itself a class expression feed their parts
//! back into the classifier with the same context, one level deeper.

mod at_rules;
mod blocks;

pub use at_rules::{container_query, media_query};
pub use blocks::{parse_font_face, parse_keyframes, Keyframes};

use serde::Serialize;

use crate::constants::{
    CONTAINER_QUERY_MARKER, CUSTOM_PROPERTY_MARKER, FONT_FACE_MARKER, KEYFRAMES_MARKER,
    MEDIA_QUERY_MARKER, NO_IMPORTANT_MARKER, PART_SEPARATOR, ROOT_VALUE_MARKER, SCHEME,
    TARGET_MARKER, TEMPLATE_MARKER, VALUE_SEPARATOR,
};
use crate::cursor::TokenCursor;
use crate::error::{CssfError, Result};
use crate::lexicon::{Ambient, Lexicon, Template};
use crate::resolver::{Expansion, ValueResolver};
use crate::selector::{class_selector, rewrite_selector};
use crate::units::scale_integer_to_rem;

/// A custom property declared on `:root`, tagged with the class that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RootDeclaration {
    pub name: String,
    pub value: String,
    pub class_name: String,
}

impl RootDeclaration {
    pub fn to_css(&self) -> String {
        format!(
            ":root {{\n  --{}: {}; /* {} */\n}}",
            self.name, self.value, self.class_name
        )
    }
}

/// Everything one class name contributes to the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseContext {
    pub class_name: String,
    pub selector: String,
    pub declarations: Vec<String>,
    pub at_rule: Option<String>,
    pub important: bool,
    pub keyframes: Option<Keyframes>,
    pub font_face: Option<String>,
    pub root_rules: Vec<RootDeclaration>,
}

impl ParseContext {
    fn new(class_name: &str, important: bool) -> Self {
        Self {
            class_name: class_name.to_string(),
            selector: class_selector(class_name),
            declarations: Vec::new(),
            at_rule: None,
            important,
            keyframes: None,
            font_face: None,
            root_rules: Vec::new(),
        }
    }

    /// True when the class produced anything worth storing.
    pub fn has_output(&self) -> bool {
        !self.declarations.is_empty()
            || !self.root_rules.is_empty()
            || self.keyframes.is_some()
            || self.font_face.is_some()
    }
}

/// Part classes, in dispatch precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    MediaQuery,
    ContainerQuery,
    Keyframes,
    FontFace,
    Target,
    CustomProperty,
    RootValue,
    Template,
    Default,
}

impl PartKind {
    pub fn classify(part: &str) -> Self {
        const MARKERS: &[(&str, PartKind)] = &[
            (MEDIA_QUERY_MARKER, PartKind::MediaQuery),
            (CONTAINER_QUERY_MARKER, PartKind::ContainerQuery),
            (KEYFRAMES_MARKER, PartKind::Keyframes),
            (FONT_FACE_MARKER, PartKind::FontFace),
            (TARGET_MARKER, PartKind::Target),
            (CUSTOM_PROPERTY_MARKER, PartKind::CustomProperty),
            (ROOT_VALUE_MARKER, PartKind::RootValue),
            (TEMPLATE_MARKER, PartKind::Template),
        ];
        MARKERS
            .iter()
            .find(|(marker, _)| part.starts_with(marker))
            .map_or(PartKind::Default, |(_, kind)| *kind)
    }
}

fn split_head(part: &str) -> (&str, &str) {
    part.split_once(VALUE_SEPARATOR).unwrap_or((part, ""))
}

pub struct ClassParser<'a> {
    resolver: ValueResolver<'a>,
    max_depth: usize,
}

impl<'a> ClassParser<'a> {
    pub fn new(lexicon: &'a Lexicon, ambient: &'a dyn Ambient, max_depth: usize) -> Self {
        Self {
            resolver: ValueResolver::new(lexicon, ambient),
            max_depth,
        }
    }

    fn lexicon(&self) -> &'a Lexicon {
        self.resolver.lexicon()
    }

    /// Parse one class name. `Ok(None)` means the class is well formed but
    /// produced nothing (for example only unknown templates).
    pub fn parse(&self, class_name: &str) -> Result<Option<ParseContext>> {
        let body = class_name.strip_prefix(SCHEME).ok_or_else(|| {
            CssfError::parse(class_name, format!("class does not start with '{}'", SCHEME))
        })?;
        if body.is_empty() {
            return Err(CssfError::parse(class_name, "no parts after the scheme marker"));
        }

        let mut parts: Vec<&str> = body.split(PART_SEPARATOR).collect();
        let important = !parts.contains(&NO_IMPORTANT_MARKER);
        parts.retain(|part| *part != NO_IMPORTANT_MARKER);

        let mut context = ParseContext::new(class_name, important);
        let mut expansion = Expansion::with_max_depth(class_name, self.max_depth);

        for part in parts {
            self.process_part(part, &mut context, &mut expansion);
        }

        for root_value in expansion.take_root_values() {
            context.root_rules.push(RootDeclaration {
                name: root_value.name,
                value: root_value.value,
                class_name: class_name.to_string(),
            });
        }

        Ok(context.has_output().then_some(context))
    }

    fn process_part(&self, part: &str, context: &mut ParseContext, expansion: &mut Expansion) {
        if part.is_empty() {
            return;
        }
        // Only reachable through template expansion; top-level markers are stripped.
        if part == NO_IMPORTANT_MARKER {
            context.important = false;
            return;
        }

        match PartKind::classify(part) {
            PartKind::MediaQuery => self.set_at_rule(part, media_query(part), context),
            PartKind::ContainerQuery => self.set_at_rule(part, container_query(part), context),
            PartKind::Keyframes => {
                if let Some(keyframes) = parse_keyframes(part, &self.resolver, expansion) {
                    context.keyframes = Some(keyframes);
                }
            }
            PartKind::FontFace => {
                if let Some(font_face) = parse_font_face(part, &self.resolver, expansion) {
                    context.font_face = Some(font_face);
                }
            }
            PartKind::Target => {
                context.selector =
                    rewrite_selector(&part[TARGET_MARKER.len()..], &context.class_name);
            }
            PartKind::CustomProperty => self.process_custom_property(part, context, expansion),
            PartKind::RootValue => self.process_root_value(part, context, expansion),
            PartKind::Template => self.process_template(part, context, expansion),
            PartKind::Default => self.process_default(part, context, expansion),
        }
    }

    fn set_at_rule(&self, part: &str, at_rule: Option<String>, context: &mut ParseContext) {
        match at_rule {
            Some(at_rule) => context.at_rule = Some(at_rule),
            None => log::debug!("Unrecognised query part '{}' in '{}'", part, context.class_name),
        }
    }

    fn process_custom_property(
        &self,
        part: &str,
        context: &mut ParseContext,
        expansion: &mut Expansion,
    ) {
        let (head, value) = split_head(part);
        let name = &head[CUSTOM_PROPERTY_MARKER.len()..];
        let value = self.resolver.resolve_sequence(value, expansion);
        if name.is_empty() || value.is_empty() {
            log::debug!("Dropping incomplete custom property '{}'", part);
            return;
        }
        context.declarations.push(format!("--{}: {}", name, value));
    }

    fn process_root_value(&self, part: &str, context: &mut ParseContext, expansion: &mut Expansion) {
        let (head, value) = split_head(part);
        let name = &head[ROOT_VALUE_MARKER.len()..];
        let value = self.resolver.resolve_sequence(value, expansion);
        if name.is_empty() || value.is_empty() {
            log::debug!("Dropping incomplete root value '{}'", part);
            return;
        }
        context.root_rules.push(RootDeclaration {
            name: name.to_string(),
            value,
            class_name: context.class_name.clone(),
        });
    }

    fn process_template(&self, part: &str, context: &mut ParseContext, expansion: &mut Expansion) {
        let (head, params) = split_head(part);
        let name = &head[TEMPLATE_MARKER.len()..];
        let Some(template) = self.lexicon().template(name) else {
            log::debug!("Unknown template '{}' in '{}'", name, context.class_name);
            return;
        };

        let raw_arguments: Vec<&str> = if params.is_empty() {
            Vec::new()
        } else {
            params.split(VALUE_SEPARATOR).collect()
        };
        let expanded = template.substitute(&raw_arguments);

        if Template::is_class_expression(&expanded) {
            if !expansion.enter() {
                return;
            }
            for nested in expanded[SCHEME.len()..].split(PART_SEPARATOR) {
                self.process_part(nested, context, expansion);
            }
            expansion.leave();
        } else if Template::is_declaration_list(&expanded) {
            context.declarations.extend(
                expanded
                    .split(';')
                    .map(str::trim)
                    .filter(|declaration| !declaration.is_empty())
                    .map(str::to_string),
            );
        } else {
            let arguments: Vec<String> = raw_arguments
                .iter()
                .map(|argument| self.resolver.resolve(argument, expansion))
                .collect();
            context.declarations.push(template.substitute(&arguments));
        }
    }

    fn process_default(&self, part: &str, context: &mut ParseContext, expansion: &mut Expansion) {
        let lexicon = self.lexicon();

        if let Some((properties, rest)) = lexicon.numeric_alias(part) {
            let value = scale_integer_to_rem(&self.resolver.resolve(rest, expansion));
            for property in properties {
                context.declarations.push(format!("{}: {}", property, value));
            }
            return;
        }

        if let Some((property, rest)) = lexicon.numeric_property(part) {
            let value = scale_integer_to_rem(&self.resolver.resolve(rest, expansion));
            context.declarations.push(format!("{}: {}", property, value));
            return;
        }

        let mut cursor = TokenCursor::split(part, VALUE_SEPARATOR);
        let Some(property) = cursor.next_token() else {
            return;
        };
        let value = self.resolver.resolve_stream(&mut cursor, expansion);
        if value.is_empty() {
            log::debug!("Dropping '{}' without a value in '{}'", part, context.class_name);
            return;
        }
        for property in lexicon.properties_for(property) {
            context.declarations.push(format!("{}: {}", property, value));
        }
    }
}
