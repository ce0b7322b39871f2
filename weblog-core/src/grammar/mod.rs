//! Line classification and field extraction.
//!
//! A [`Grammar`] is a fixed pattern with a mandatory set of named captures.
//! Each raw line is tried against exactly one grammar and either yields a
//! [`FieldMap`] or nothing. A non-matching line is not an error; callers
//! count it and move on.
//!
//! The two grammars differ in how they are applied:
//!
//! - **access** searches for the pattern anywhere in the line, so junk
//!   before the client address is tolerated.
//! - **error** must match the whole line after surrounding whitespace is
//!   trimmed.

mod fields;
mod patterns;

#[cfg(test)]
mod tests;

pub use fields::FieldMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    Access,
    Error,
}

/// How a grammar's pattern is applied to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Unanchored: the first occurrence anywhere in the raw line.
    Search,
    /// Anchored: the trimmed line must match from start to end.
    FullLine,
}

struct GrammarSpec {
    body: &'static str,
    mode: MatchMode,
    fields: &'static [&'static str],
}

const ACCESS_SPEC: GrammarSpec = GrammarSpec {
    body: patterns::ACCESS,
    mode: MatchMode::Search,
    fields: patterns::ACCESS_FIELDS,
};

const ERROR_SPEC: GrammarSpec = GrammarSpec {
    body: patterns::ERROR,
    mode: MatchMode::FullLine,
    fields: patterns::ERROR_FIELDS,
};

static ACCESS_REGEX: Lazy<Regex> = Lazy::new(|| compile(&ACCESS_SPEC));
static ERROR_REGEX: Lazy<Regex> = Lazy::new(|| compile(&ERROR_SPEC));

fn compile(spec: &GrammarSpec) -> Regex {
    let source = match spec.mode {
        MatchMode::Search => spec.body.to_string(),
        MatchMode::FullLine => format!("^(?:{})$", spec.body),
    };
    Regex::new(&source).expect("grammar patterns are compile-time constants")
}

impl Grammar {
    fn spec(self) -> &'static GrammarSpec {
        match self {
            Grammar::Access => &ACCESS_SPEC,
            Grammar::Error => &ERROR_SPEC,
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Grammar::Access => &ACCESS_REGEX,
            Grammar::Error => &ERROR_REGEX,
        }
    }

    pub fn mode(self) -> MatchMode {
        self.spec().mode
    }

    /// Capture names that must all be present for a line to count as a match.
    pub fn fields(self) -> &'static [&'static str] {
        self.spec().fields
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grammar::Access => "access",
            Grammar::Error => "error",
        }
    }

    /// Extracts the named fields of `line`, or `None` if the line does not
    /// belong to this grammar.
    pub fn extract(self, line: &str) -> Option<FieldMap<'_>> {
        let haystack = match self.mode() {
            MatchMode::Search => line,
            MatchMode::FullLine => line.trim(),
        };

        let caps = self.regex().captures(haystack)?;

        let mut fields = FieldMap::new(self);
        for name in self.fields() {
            let value = caps.name(name)?;
            fields.insert(name, value.as_str());
        }

        Some(fields)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
