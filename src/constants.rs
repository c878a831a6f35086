//! Grammar markers and limits shared by the parser, resolver and builder

/// Every processed class name starts with this marker.
pub const SCHEME: &str = "cssf--";

/// Separates parts inside a class name.
pub const PART_SEPARATOR: &str = "--";

/// Separates the property token from value tokens inside a part.
pub const VALUE_SEPARATOR: char = '_';

/// Separates selector instructions inside a `tar-` part.
pub const SELECTOR_SEPARATOR: char = '-';

/// Part that switches off `!important` for the whole class.
pub const NO_IMPORTANT_MARKER: &str = "ni";

/// Ends the argument list of a function token.
pub const CLOSE_SENTINEL: &str = "close";

/// Character substitution that attaches to its neighbours without a space.
pub const GLUE_PREFIX: &str = "chrsl-";

/// Positional placeholder marker inside template blueprints.
pub const PLACEHOLDER: char = '§';

pub const MAX_RECURSION_DEPTH: usize = 15;

pub const PX_PER_REM: f64 = 16.0;

pub const IMPORTANT_SUFFIX: &str = " !important";

/// Id of the style element a browser host writes the stylesheet into.
pub const STYLE_ELEMENT_ID: &str = "cssf-main";

// Part markers, in dispatch order
pub const MEDIA_QUERY_MARKER: &str = "mq";
pub const CONTAINER_QUERY_MARKER: &str = "cq";
pub const KEYFRAMES_MARKER: &str = "kf-";
pub const FONT_FACE_MARKER: &str = "fface-";
pub const TARGET_MARKER: &str = "tar-";
pub const CUSTOM_PROPERTY_MARKER: &str = "val-";
pub const ROOT_VALUE_MARKER: &str = "rval-";
pub const TEMPLATE_MARKER: &str = "tpl-";

// Value markers that are not part markers
pub const FUNCTION_MARKER: &str = "fn-";
pub const CUSTOM_FUNCTION_MARKER: &str = "cfn-";
