//! Symbolic names for characters that cannot appear in a class token

pub(crate) const CHARS: &[(&str, &str)] = &[
    ("star", "*"),
    ("comma", ","),
    ("dot", "."),
    ("dash", "-"),
    ("space", " "),
    ("slash", "/"),
    ("pipe", "|"),
    ("plus", "+"),
    ("minus", "-"),
    ("equal", "="),
    ("question", "?"),
    ("exclamation", "!"),
    ("colon", ":"),
    ("semicolon", ";"),
    ("percent", "%"),
    ("amp", "&"),
    ("at", "@"),
    ("hash", "#"),
    ("dollar", "$"),
    ("caret", "^"),
    ("tilde", "~"),
    ("grave", "`"),
    ("lpar", "("),
    ("rpar", ")"),
    ("lbrace", "{"),
    ("rbrace", "}"),
    ("lbrack", "["),
    ("rbrack", "]"),
    ("lt", "<"),
    ("gt", ">"),
];
