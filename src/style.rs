//! The closed set of style keywords a prompt can be steered towards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Style keyword embedded in the generated prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    #[default]
    #[serde(rename = "Ultra HD")]
    UltraHd,
    #[serde(rename = "Realistic")]
    Realistic,
    #[serde(rename = "Smooth face")]
    SmoothFace,
    #[serde(rename = "Cinematic")]
    Cinematic,
}

impl Style {
    /// Every style, in the order the picker shows them.
    pub const ALL: [Style; 4] = [
        Style::UltraHd,
        Style::Realistic,
        Style::SmoothFace,
        Style::Cinematic,
    ];

    /// Display label, also the keyword substituted into the instruction.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UltraHd => "Ultra HD",
            Self::Realistic => "Realistic",
            Self::SmoothFace => "Smooth face",
            Self::Cinematic => "Cinematic",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a label is not one of the four known styles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style: {0}")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.label() == s)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first() {
        assert_eq!(Style::default(), Style::ALL[0]);
        assert_eq!(Style::default().label(), "Ultra HD");
    }

    #[test]
    fn test_parse_labels() {
        for style in Style::ALL {
            assert_eq!(style.label().parse::<Style>(), Ok(style));
        }
        assert_eq!(
            "cinematic".parse::<Style>(),
            Err(UnknownStyle("cinematic".into()))
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Style::SmoothFace).unwrap();
        assert_eq!(json, "\"Smooth face\"");

        let style: Style = serde_json::from_str("\"Cinematic\"").unwrap();
        assert_eq!(style, Style::Cinematic);

        assert!(serde_json::from_str::<Style>("\"Vaporwave\"").is_err());
    }
}
