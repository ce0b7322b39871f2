use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Browser {
    Chrome,
    Firefox,
    Edge,
    Safari,
    Other,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Firefox => "Firefox",
            Browser::Edge => "Edge",
            Browser::Safari => "Safari",
            Browser::Other => "Other",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user agent matches when it contains any `include` marker and none of the
/// `exclude` markers. Comparisons are case-sensitive substring tests.
#[derive(Debug, Clone, Copy)]
pub struct BrowserRule {
    pub browser: Browser,
    pub include: &'static [&'static str],
    pub exclude: &'static [&'static str],
}

impl BrowserRule {
    pub fn matches(&self, user_agent: &str) -> bool {
        self.include.iter().any(|m| user_agent.contains(m))
            && !self.exclude.iter().any(|m| user_agent.contains(m))
    }
}

/// Evaluated top to bottom; the first matching rule decides.
pub const BROWSER_RULES: &[BrowserRule] = &[
    BrowserRule {
        browser: Browser::Chrome,
        include: &["Chrome"],
        exclude: &["Edg"],
    },
    BrowserRule {
        browser: Browser::Firefox,
        include: &["Firefox"],
        exclude: &[],
    },
    BrowserRule {
        browser: Browser::Edge,
        include: &["Edg", "Edge"],
        exclude: &[],
    },
    BrowserRule {
        browser: Browser::Safari,
        include: &["Safari"],
        exclude: &["Chrome"],
    },
];

pub fn classify_browser(user_agent: &str) -> Browser {
    BROWSER_RULES
        .iter()
        .find(|rule| rule.matches(user_agent))
        .map(|rule| rule.browser)
        .unwrap_or(Browser::Other)
}
