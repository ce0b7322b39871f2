use serde::Serialize;
use woothee::parser::Parser;

/// Coarse device category of a user agent, used for the device breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Appliance,
    Bot,
    Unknown,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Appliance => "appliance",
            DeviceType::Bot => "bot",
            DeviceType::Unknown => "unknown",
        }
    }
}

pub struct DeviceClassifier {
    parser: Parser,
}

impl Default for DeviceClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceClassifier {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn classify(&self, ua: &str) -> DeviceType {
        let Some(result) = self.parser.parse(ua) else {
            return DeviceType::Unknown;
        };

        match result.category {
            "pc" => DeviceType::Desktop,
            "smartphone" | "mobilephone" => DeviceType::Mobile,
            "appliance" => DeviceType::Appliance,
            "crawler" => DeviceType::Bot,
            _ => DeviceType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_desktop_mobile_and_crawlers() {
        let classifier = DeviceClassifier::new();

        assert_eq!(
            classifier.classify(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
            ),
            DeviceType::Desktop
        );
        assert_eq!(
            classifier.classify(
                "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1"
            ),
            DeviceType::Mobile
        );
        assert_eq!(
            classifier.classify(
                "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"
            ),
            DeviceType::Bot
        );
    }

    #[test]
    fn empty_agent_is_unknown() {
        assert_eq!(DeviceClassifier::new().classify(""), DeviceType::Unknown);
    }
}
