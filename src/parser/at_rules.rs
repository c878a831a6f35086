//! Media and container query parts

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{CONTAINER_QUERY_MARKER, MEDIA_QUERY_MARKER, VALUE_SEPARATOR};

static NUMERIC_MEDIA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^mq(\d+)(max)?(?:-(.+))?$").unwrap());
static NUMERIC_CONTAINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^cq(\d+)(max)?(?:-(.+))?$").unwrap());

fn width_clause(width: &str, max: bool) -> String {
    format!("({}-width: {}px)", if max { "max" } else { "min" }, width)
}

fn spaced(tokens: &str) -> String {
    tokens.replace(VALUE_SEPARATOR, " ")
}

/// Free-form `<marker>-a_b_c` tail, if any.
fn free_form<'p>(part: &'p str, marker: &str) -> Option<&'p str> {
    part.strip_prefix(marker)?
        .strip_prefix('-')
        .filter(|rest| !rest.is_empty())
}

/// `mq768` → `@media (min-width: 768px)`, `mq768max-screen` →
/// `@media screen and (max-width: 768px)`, `mq-print` → `@media print`.
pub fn media_query(part: &str) -> Option<String> {
    if let Some(caps) = NUMERIC_MEDIA.captures(part) {
        let width = width_clause(&caps[1], caps.get(2).is_some());
        return Some(match caps.get(3) {
            Some(media_type) => format!("@media {} and {}", spaced(media_type.as_str()), width),
            None => format!("@media {}", width),
        });
    }
    free_form(part, MEDIA_QUERY_MARKER).map(|rest| format!("@media {}", spaced(rest)))
}

/// `cq600` → `@container (min-width: 600px)`, `cq600-sidebar` →
/// `@container sidebar (min-width: 600px)`, `cq-card_(width_>_30em)` → `@container card (width > 30em)`.
pub fn container_query(part: &str) -> Option<String> {
    if let Some(caps) = NUMERIC_CONTAINER.captures(part) {
        let width = width_clause(&caps[1], caps.get(2).is_some());
        return Some(match caps.get(3) {
            Some(name) => format!("@container {} {}", spaced(name.as_str()), width),
            None => format!("@container {}", width),
        });
    }
    free_form(part, CONTAINER_QUERY_MARKER).map(|rest| format!("@container {}", spaced(rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_media_queries() {
        assert_eq!(media_query("mq768").unwrap(), "@media (min-width: 768px)");
        assert_eq!(media_query("mq768max").unwrap(), "@media (max-width: 768px)");
        assert_eq!(
            media_query("mq1024-screen").unwrap(),
            "@media screen and (min-width: 1024px)"
        );
        assert_eq!(
            media_query("mq480max-only_screen").unwrap(),
            "@media only screen and (max-width: 480px)"
        );
    }

    #[test]
    fn test_free_form_media_query() {
        assert_eq!(media_query("mq-print").unwrap(), "@media print");
        assert_eq!(
            media_query("mq-(prefers-color-scheme:_dark)").unwrap(),
            "@media (prefers-color-scheme: dark)"
        );
        assert!(media_query("mq").is_none());
        assert!(media_query("mqx").is_none());
    }

    #[test]
    fn test_container_queries() {
        assert_eq!(container_query("cq600").unwrap(), "@container (min-width: 600px)");
        assert_eq!(
            container_query("cq600max-sidebar").unwrap(),
            "@container sidebar (max-width: 600px)"
        );
        assert_eq!(
            container_query("cq-card_(width_>_30em)").unwrap(),
            "@container card (width > 30em)"
        );
        assert!(container_query("cq-").is_none());
    }
}
