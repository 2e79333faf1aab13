// based on: https://github.com/cdimascio/dotenv-java/blob/0c5642eeac01cc3532d46e02d4901c58a9261961/src/main/java/io/github/cdimascio/dotenv/internal/DotenvParser.java
// Parses the format understood by dotenv-java with `ignoreIfMalformed()`.
// The line grammar is that library's regular expression:
//     ^\s*([\w.\-]+)\s*(=)\s*('[^']*'|"[^"]*"|[^#]*)?\s*(#.*)?$
use std::path::Path;

use crate::{line_splitter::split_lines, Env, Options, DEBUG_PREFIX};

/// Outcome of parsing a single line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Line<'a> {
    Blank,
    Comment,
    Entry { key: &'a str, value: &'a str },
    Malformed(Malformed),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Malformed {
    pub reason: Reason,
    /// 1-based column (in chars) of the offending position.
    pub column: usize,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Reason {
    ExpectedName(Option<char>),
    ExpectedEquals(Option<char>),
    SingleDoubleQuote,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reason::ExpectedName(Some(ch))   => write!(f, "expected variable name, found {ch:?}"),
            Reason::ExpectedName(None)       => f.write_str("expected variable name, found end of line"),
            Reason::ExpectedEquals(Some(ch)) => write!(f, "expected '=', found {ch:?}"),
            Reason::ExpectedEquals(None)     => f.write_str("expected '=', found end of line"),
            Reason::SingleDoubleQuote        => f.write_str("value is a single double quote"),
        }
    }
}

impl<'a> Line<'a> {
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Line::Malformed(_))
    }
}

pub fn parse_line(raw: &str) -> Line<'_> {
    let line = trim(raw);
    let offset = raw.len() - raw.trim_start_matches(|ch| ch <= ' ').len();
    let fail = |reason, index| malformed(raw, offset + index, reason);

    if is_empty_line(line) {
        return Line::Blank;
    }

    if is_comment(line) {
        return Line::Comment;
    }

    let key_start = skip_ws(line, 0);
    let key_end = find_vardef_end(line, key_start);

    if key_start == key_end {
        return fail(Reason::ExpectedName(line[key_start..].chars().next()), key_start);
    }

    let index = skip_ws(line, key_end);
    let next = line[index..].chars().next();
    if next != Some('=') {
        return fail(Reason::ExpectedEquals(next), index);
    }

    let value_start = skip_ws(line, index + 1);
    let mut value_end = value_start;

    if let Some(quote @ ('"' | '\'')) = line[value_start..].chars().next() {
        if let Some(end) = line[value_start + 1..].find(quote) {
            value_end = value_start + end + 2;
        }
    }

    if value_start == value_end {
        value_end = unquoted_end(line, value_start);
    } else {
        let index = skip_ws(line, value_end);
        if !matches!(line[index..].chars().next(), None | Some('#')) {
            // trailing garbage after the closing quote: read it as an unquoted value
            value_end = unquoted_end(line, value_start);
        }
    }

    let value = &line[value_start..value_end];
    if value == "\"" {
        return fail(Reason::SingleDoubleQuote, value_start);
    }

    Line::Entry {
        key: cut_null(&line[key_start..key_end]),
        value: cut_null(normalize_value(value)),
    }
}

fn malformed(raw: &str, index: usize, reason: Reason) -> Line<'static> {
    Line::Malformed(Malformed {
        reason,
        column: raw[..index].chars().count() + 1,
    })
}

/// Parses every line of `src` into `env`. Malformed lines are skipped and,
/// in debug mode, reported on stderr.
pub fn parse_into(src: &str, env: &mut dyn Env, options: &Options<&Path>) {
    let path_str = options.path.to_string_lossy();

    for (index, raw) in split_lines(src).enumerate() {
        match parse_line(raw) {
            Line::Entry { key, value } => {
                env.set(key.as_ref(), value.as_ref());
            }
            Line::Malformed(Malformed { reason, column }) => {
                if options.debug {
                    let lineno = index + 1;
                    eprintln!("{DEBUG_PREFIX}{path_str}:{lineno}:{column}: skipped malformed line, {reason}: {raw}");
                }
            }
            Line::Blank | Line::Comment => {}
        }
    }
}

#[inline]
fn unquoted_end(line: &str, value_start: usize) -> usize {
    match line[value_start..].find('#') {
        Some(comment_start) => comment_start + value_start,
        None => line.len(),
    }
}

#[inline]
fn skip_ws(src: &str, index: usize) -> usize {
    match src[index..].find(|ch| !is_space(ch)) {
        Some(pos) => pos + index,
        None => src.len(),
    }
}

#[inline]
fn is_vardef(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' || ch == '-'
}

#[inline]
fn find_vardef_end(src: &str, index: usize) -> usize {
    match src[index..].find(|ch| !is_vardef(ch)) {
        Some(pos) => pos + index,
        None => src.len(),
    }
}

// Java String.trim()
#[inline]
fn trim(src: &str) -> &str {
    src.trim_matches(|ch| ch <= ' ')
}

#[inline]
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[inline]
fn is_empty_line(src: &str) -> bool {
    !src.contains(|ch| !is_space(ch))
}

#[inline]
fn is_comment(src: &str) -> bool {
    src.starts_with('#') || src.starts_with("////")
}

#[inline]
fn is_quoted(src: &str) -> bool {
    src.starts_with('"') && src.ends_with('"')
}

#[inline]
fn normalize_value(value: &str) -> &str {
    let value = trim(value);
    if value.len() > 1 && is_quoted(value) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[inline]
fn cut_null(src: &str) -> &str {
    match src.find('\0') {
        Some(index) => &src[..index],
        None => src,
    }
}
