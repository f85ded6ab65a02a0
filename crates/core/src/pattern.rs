//! How manufacturer names and product keywords turn into regular expressions.

use core::str::FromStr;
use std::borrow::Cow;

use regex::{Regex, RegexBuilder};

use crate::error::MatchError;

/// Treatment of catalog text when it is spliced into a pattern.
///
/// `Raw` keeps metacharacters live: a `.` in a manufacturer name matches any
/// character, and a name such as `Acme(Labs` fails to compile. A `{` that does
/// not open a counted repetition (as in `X{2`) matches itself. Backreferences
/// and lookaround are not supported and fail to compile.
/// `Literal` escapes the text first so it only ever matches itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PatternMode {
    #[default]
    Raw,
    Literal,
}

impl PatternMode {
    /// Prepare `text` for use as a pattern fragment.
    pub fn fragment<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            PatternMode::Raw => literal_stray_braces(text),
            PatternMode::Literal => Cow::Owned(regex::escape(text)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternMode::Raw => "raw",
            PatternMode::Literal => "literal",
        }
    }
}

impl core::fmt::Display for PatternMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternMode {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(PatternMode::Raw),
            "literal" => Ok(PatternMode::Literal),
            other => Err(MatchError::validation(format!(
                "unknown pattern mode `{other}` (expected `raw` or `literal`)"
            ))),
        }
    }
}

/// Rewrite braces that cannot start a counted repetition as `\{`, and spell
/// `{,n}` as `{0,n}`. Escaped characters and character classes pass through.
fn literal_stray_braces(text: &str) -> Cow<'_, str> {
    if !text.contains('{') {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 4);
    let mut in_class = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                // Copy the escape and the escaped character (which may be multi-byte).
                let next = text[i + 1..].chars().next().map_or(0, char::len_utf8);
                out.push_str(&text[i..i + 1 + next]);
                i += 1 + next;
                continue;
            }
            b'[' if !in_class => in_class = true,
            b']' if in_class => in_class = false,
            b'{' if !in_class => {
                match repetition_bounds(&text[i + 1..]) {
                    Some((lo, rest)) => {
                        out.push('{');
                        if lo.is_empty() {
                            out.push('0');
                        }
                        out.push_str(lo);
                        out.push_str(rest);
                        i += 1 + lo.len() + rest.len();
                    }
                    None => {
                        out.push_str("\\{");
                        i += 1;
                    }
                }
                continue;
            }
            _ => {}
        }
        let len = text[i..].chars().next().map_or(1, char::len_utf8);
        out.push_str(&text[i..i + len]);
        i += len;
    }

    Cow::Owned(out)
}

/// For text following a `{`, return the lower bound digits and the remainder of
/// a `m}`, `m,}`, `m,n}`, `,n}` or `,}` repetition. `{}` is not a repetition.
fn repetition_bounds(after: &str) -> Option<(&str, &str)> {
    let lo_len = after.bytes().take_while(u8::is_ascii_digit).count();
    let (lo, tail) = after.split_at(lo_len);

    let rest_len = if let Some(upper) = tail.strip_prefix(',') {
        let hi_len = upper.bytes().take_while(u8::is_ascii_digit).count();
        upper[hi_len..].starts_with('}').then_some(1 + hi_len + 1)?
    } else if !lo.is_empty() && tail.starts_with('}') {
        1
    } else {
        return None;
    };

    Some((lo, &tail[..rest_len]))
}

/// Compile a case-insensitive pattern, reporting failures against `source`
/// (the catalog text it was built from) rather than the assembled expression.
pub fn compile_case_insensitive(pattern: &str, source: &str) -> Result<Regex, MatchError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| MatchError::invalid_pattern(source, e))
}
