//! Panel font
//!
//! Textual form is `Family-STYLE-size`, e.g. `Monospaced-PLAIN-12`. Family
//! names may themselves contain dashes; style and size are taken from the end.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_FAMILY: &str = "Monospaced";
pub const DEFAULT_SIZE: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "PLAIN",
            Self::Bold => "BOLD",
            Self::Italic => "ITALIC",
            Self::BoldItalic => "BOLDITALIC",
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

impl FromStr for FontStyle {
    type Err = FontParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PLAIN" => Ok(Self::Plain),
            "BOLD" => Ok(Self::Bold),
            "ITALIC" => Ok(Self::Italic),
            "BOLDITALIC" => Ok(Self::BoldItalic),
            _ => Err(FontParseError::UnknownStyle(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontParseError {
    #[error("font description is empty")]
    Empty,
    #[error("expected Family-STYLE-size, got {0:?}")]
    Malformed(String),
    #[error("unknown font style {0:?}")]
    UnknownStyle(String),
    #[error("invalid font size {0:?}")]
    InvalidSize(String),
}

/// Font used by the log panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    pub style: FontStyle,
    pub size: u16,
}

impl Font {
    pub fn new(family: impl Into<String>, style: FontStyle, size: u16) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    /// Same family and style, different size (never below 1)
    pub fn with_size(&self, size: u16) -> Self {
        Self {
            size: size.max(1),
            ..self.clone()
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, FontStyle::Plain, DEFAULT_SIZE)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.family, self.style.as_str(), self.size)
    }
}

impl FromStr for Font {
    type Err = FontParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FontParseError::Empty);
        }

        let mut parts = s.rsplitn(3, '-');
        let (size, style, family) = match (parts.next(), parts.next(), parts.next()) {
            (Some(size), Some(style), Some(family)) if !family.is_empty() => {
                (size, style, family)
            }
            _ => return Err(FontParseError::Malformed(s.to_string())),
        };

        let size: u16 = size
            .parse()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| FontParseError::InvalidSize(size.to_string()))?;

        Ok(Self::new(family, style.parse()?, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font() {
        assert_eq!(Font::default().to_string(), "Monospaced-PLAIN-12");
    }

    #[test]
    fn test_parse_font() {
        let font: Font = "Courier New-BOLD-14".parse().unwrap();
        assert_eq!(font.family, "Courier New");
        assert_eq!(font.style, FontStyle::Bold);
        assert_eq!(font.size, 14);
    }

    #[test]
    fn test_parse_family_with_dashes() {
        let font: Font = "DejaVu-Sans-Mono-italic-10".parse().unwrap();
        assert_eq!(font.family, "DejaVu-Sans-Mono");
        assert_eq!(font.style, FontStyle::Italic);
        assert_eq!(font.size, 10);
    }

    #[test]
    fn test_display_parses_back() {
        let font = Font::new("Fira Code", FontStyle::BoldItalic, 11);
        let parsed: Font = font.to_string().parse().unwrap();
        assert_eq!(parsed, font);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Font>(), Err(FontParseError::Empty));
        assert!(matches!(
            "Monospaced".parse::<Font>(),
            Err(FontParseError::Malformed(_))
        ));
        assert!(matches!(
            "Monospaced-HEAVY-12".parse::<Font>(),
            Err(FontParseError::UnknownStyle(_))
        ));
        assert!(matches!(
            "Monospaced-PLAIN-0".parse::<Font>(),
            Err(FontParseError::InvalidSize(_))
        ));
        assert!(matches!(
            "Monospaced-PLAIN-big".parse::<Font>(),
            Err(FontParseError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_with_size_clamps_to_one() {
        let font = Font::default().with_size(0);
        assert_eq!(font.size, 1);
        assert_eq!(font.family, DEFAULT_FAMILY);
    }
}
