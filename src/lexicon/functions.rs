//! Custom computed functions (`cfn-` tokens)

use chrono::{DateTime, Datelike, Local};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::constants::PX_PER_REM;

/// Clock, viewport and randomness readers the custom functions depend on.
pub trait Ambient {
    fn now(&self) -> DateTime<Local>;

    /// Viewport size in CSS pixels, when the host knows it.
    fn viewport(&self) -> Option<(u32, u32)>;

    /// Six pseudo-random decimal digits.
    fn random_digits(&self) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct SystemAmbient {
    viewport: Option<(u32, u32)>,
}

impl SystemAmbient {
    pub fn new(viewport: Option<(u32, u32)>) -> Self {
        Self { viewport }
    }
}

impl Ambient for SystemAmbient {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn viewport(&self) -> Option<(u32, u32)> {
        self.viewport
    }

    fn random_digits(&self) -> String {
        format!("{:06}", rand::thread_rng().gen_range(0..1_000_000u32))
    }
}

/// Returns `None` when the arguments cannot be computed; the caller then keeps
/// the token literally.
pub type CustomFunction = fn(&[String], &dyn Ambient) -> Option<String>;

pub(crate) const FUNCTIONS: &[(&str, CustomFunction)] = &[
    ("date-now", date_now),
    ("date-time", date_time),
    ("timestamp", timestamp),
    ("random", random),
    ("year", year),
    ("month", month),
    ("day", day),
    ("clamp", clamp),
    ("viewport-width", viewport_width),
    ("viewport-height", viewport_height),
    ("rem-to-px", rem_to_px),
    ("px-to-rem", px_to_rem),
    ("percentage", percentage),
];

static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").unwrap()
});

/// Read the numeric prefix of a value such as `16px` or `1.5rem`.
pub fn parse_leading_float(value: &str) -> Option<f64> {
    LEADING_FLOAT
        .find(value)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
}

fn arg(args: &[String], index: usize) -> Option<f64> {
    args.get(index).and_then(|a| parse_leading_float(a))
}

fn date_now(_args: &[String], ambient: &dyn Ambient) -> Option<String> {
    Some(ambient.now().format("%-d.%-m.%Y").to_string())
}

fn date_time(_args: &[String], ambient: &dyn Ambient) -> Option<String> {
    Some(ambient.now().format("%-d.%-m.%Y, %H:%M:%S").to_string())
}

fn timestamp(_args: &[String], ambient: &dyn Ambient) -> Option<String> {
    Some(ambient.now().timestamp_millis().to_string())
}

fn random(_args: &[String], ambient: &dyn Ambient) -> Option<String> {
    Some(ambient.random_digits())
}

fn year(_args: &[String], ambient: &dyn Ambient) -> Option<String> {
    Some(ambient.now().year().to_string())
}

fn month(_args: &[String], ambient: &dyn Ambient) -> Option<String> {
    Some(ambient.now().month().to_string())
}

fn day(_args: &[String], ambient: &dyn Ambient) -> Option<String> {
    Some(ambient.now().day().to_string())
}

fn clamp(args: &[String], _ambient: &dyn Ambient) -> Option<String> {
    match (arg(args, 0), arg(args, 1), arg(args, 2)) {
        (Some(min), Some(max), Some(viewport)) => Some(clamp_builder(0.0, viewport, min, max)),
        _ => {
            let literal = |i: usize| args.get(i).map(String::as_str).unwrap_or_default();
            Some(format!("clamp({}, {}, {})", literal(0), literal(1), literal(2)))
        }
    }
}

/// Fluid `clamp()` that scales a font size linearly between two viewport widths.
pub fn clamp_builder(
    min_width_px: f64,
    max_width_px: f64,
    min_font_px: f64,
    max_font_px: f64,
) -> String {
    let min_font = min_font_px / PX_PER_REM;
    let max_font = max_font_px / PX_PER_REM;
    let min_width = min_width_px / PX_PER_REM;
    let max_width = max_width_px / PX_PER_REM;

    if max_width <= min_width {
        return format!(
            "clamp({:.4}rem, {:.4}rem, {:.4}rem)",
            min_font,
            (min_font + max_font) / 2.0,
            max_font
        );
    }

    let slope = (max_font - min_font) / (max_width - min_width);
    let intersection = -min_width * slope + min_font;

    format!(
        "clamp({:.4}rem, {:.4}rem + {:.4}vw, {:.4}rem)",
        min_font,
        intersection,
        slope * 100.0,
        max_font
    )
}

fn viewport_width(_args: &[String], ambient: &dyn Ambient) -> Option<String> {
    Some(match ambient.viewport() {
        Some((width, _)) => format!("{}px", width),
        None => "100vw".to_string(),
    })
}

fn viewport_height(_args: &[String], ambient: &dyn Ambient) -> Option<String> {
    Some(match ambient.viewport() {
        Some((_, height)) => format!("{}px", height),
        None => "100vh".to_string(),
    })
}

fn rem_to_px(args: &[String], _ambient: &dyn Ambient) -> Option<String> {
    arg(args, 0).map(|rem| format!("{}px", rem * PX_PER_REM))
}

fn px_to_rem(args: &[String], _ambient: &dyn Ambient) -> Option<String> {
    arg(args, 0).map(|px| format!("{}rem", px / PX_PER_REM))
}

fn percentage(args: &[String], _ambient: &dyn Ambient) -> Option<String> {
    let part = arg(args, 0)?;
    let whole = arg(args, 1)?;
    if whole == 0.0 {
        return None;
    }
    Some(format!("{}%", part / whole * 100.0))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use chrono::TimeZone;

    /// Ambient state pinned to 2024-03-09 08:05:07 local time and a 1280x720 viewport.
    pub struct FixedAmbient;

    impl Ambient for FixedAmbient {
        fn now(&self) -> DateTime<Local> {
            Local.with_ymd_and_hms(2024, 3, 9, 8, 5, 7).unwrap()
        }

        fn viewport(&self) -> Option<(u32, u32)> {
            Some((1280, 720))
        }

        fn random_digits(&self) -> String {
            "424242".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FixedAmbient;
    use super::*;

    fn call(name: &str, args: &[&str]) -> Option<String> {
        let (_, function) = FUNCTIONS.iter().find(|(n, _)| *n == name).unwrap();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        function(&args, &FixedAmbient)
    }

    #[test]
    fn test_date_functions_use_ambient_clock() {
        assert_eq!(call("date-now", &[]).unwrap(), "9.3.2024");
        assert_eq!(call("date-time", &[]).unwrap(), "9.3.2024, 08:05:07");
        assert_eq!(call("year", &[]).unwrap(), "2024");
        assert_eq!(call("month", &[]).unwrap(), "3");
        assert_eq!(call("day", &[]).unwrap(), "9");
        assert_eq!(call("random", &[]).unwrap(), "424242");
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(call("rem-to-px", &["1.5rem"]).unwrap(), "24px");
        assert_eq!(call("px-to-rem", &["24px"]).unwrap(), "1.5rem");
        assert_eq!(call("percentage", &["1", "4"]).unwrap(), "25%");
        assert_eq!(call("percentage", &["1", "0"]), None);
        assert_eq!(call("px-to-rem", &["wide"]), None);
    }

    #[test]
    fn test_viewport_functions() {
        assert_eq!(call("viewport-width", &[]).unwrap(), "1280px");
        assert_eq!(call("viewport-height", &[]).unwrap(), "720px");
    }

    #[test]
    fn test_clamp_builder_fluid_range() {
        assert_eq!(
            call("clamp", &["16px", "32px", "1600px"]).unwrap(),
            "clamp(1.0000rem, 1.0000rem + 1.0000vw, 2.0000rem)"
        );
    }

    #[test]
    fn test_clamp_builder_degenerate_range() {
        assert_eq!(
            clamp_builder(800.0, 800.0, 16.0, 32.0),
            "clamp(1.0000rem, 1.5000rem, 2.0000rem)"
        );
    }

    #[test]
    fn test_clamp_keeps_unparsable_arguments() {
        assert_eq!(
            call("clamp", &["small", "32px", "1600px"]).unwrap(),
            "clamp(small, 32px, 1600px)"
        );
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("16px"), Some(16.0));
        assert_eq!(parse_leading_float("-0.5rem"), Some(-0.5));
        assert_eq!(parse_leading_float("px"), None);
    }
}
