pub const FIXTURE: &[(&str, &str)] = &[
    ("VAR1", "plain"),
    ("VAR2", "spaced value"),
    ("VAR3", "double quoted"),
    ("VAR4", "'single quoted'"),
    ("VAR5", "value"),
    ("VAR6", "quoted # hash"),
    ("VAR7", "\"quoted\" trailing"),
    ("VAR9", ""),
    ("VAR11", "second"),
    ("dotted.key-name", "ok"),
    ("VAR12", "\"unterminated"),
];

pub const NOT_SET: &[&str] = &[
    "not_a_pair",
    "export",
    "VAR8",
    "export VAR8",
    "VAR10",
];
