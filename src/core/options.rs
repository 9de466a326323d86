//! Parse and render options

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::error::TableError;

/// Float placement hint for the `table` environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Placement {
    /// `h` - here
    #[default]
    #[serde(rename = "h")]
    Here,
    /// `t` - top of page
    #[serde(rename = "t")]
    Top,
    /// `b` - bottom of page
    #[serde(rename = "b")]
    Bottom,
    /// `p` - dedicated float page
    #[serde(rename = "p")]
    Page,
}

impl Placement {
    /// Parse an optional token; blank text means no placement suffix.
    pub fn parse_optional(token: &str) -> Result<Option<Placement>, TableError> {
        if token.trim().is_empty() {
            Ok(None)
        } else {
            token.parse().map(Some)
        }
    }

    /// The single-letter LaTeX token
    pub fn token(&self) -> &'static str {
        match self {
            Placement::Here => "h",
            Placement::Top => "t",
            Placement::Bottom => "b",
            Placement::Page => "p",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Placement {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "h" => Ok(Placement::Here),
            "t" => Ok(Placement::Top),
            "b" => Ok(Placement::Bottom),
            "p" => Ok(Placement::Page),
            other => Err(TableError::InvalidPlacement(other.to_string())),
        }
    }
}

/// Where the caption goes relative to the tabular
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionPosition {
    #[default]
    Top,
    Bottom,
}

impl FromStr for CaptionPosition {
    type Err = TableError;

    /// Accepts `top`/`bottom` in any case, and the labels `上`/`下`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" | "上" => Ok(CaptionPosition::Top),
            "bottom" | "下" => Ok(CaptionPosition::Bottom),
            other => Err(TableError::InvalidCaptionPosition(other.to_string())),
        }
    }
}

/// Options for the delimiter-text parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Cell delimiter (tab for spreadsheet pastes)
    pub delimiter: char,
    /// Promote the first row to column labels
    pub first_row_as_header: bool,
    /// Move the first column into per-row labels
    pub first_column_as_index: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            first_row_as_header: true,
            first_column_as_index: false,
        }
    }
}

/// Options for the simple (single header row) LaTeX renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Caption text; empty omits `\caption`
    pub caption: String,
    /// Label text; empty omits `\label`
    pub label: String,
    pub placement: Placement,
    pub caption_position: CaptionPosition,
    /// Center the leftmost column too (default: left-aligned)
    pub left_centered: bool,
}

/// Options for the merged-header LaTeX renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexOptions {
    /// Caption text; empty omits `\caption`
    pub caption: String,
    /// Label text; empty omits `\label`
    pub label: String,
    /// `None` leaves the `table` opener without a placement suffix
    #[serde(deserialize_with = "optional_placement")]
    pub placement: Option<Placement>,
}

/// `null`, a missing field and `""` all deserialize to `None`
fn optional_placement<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Placement>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(token) => Placement::parse_optional(&token).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_from_str() {
        assert_eq!("h".parse::<Placement>().unwrap(), Placement::Here);
        assert_eq!(" p ".parse::<Placement>().unwrap(), Placement::Page);
        assert!(matches!(
            "x".parse::<Placement>(),
            Err(TableError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn test_placement_token_roundtrip() {
        for placement in [
            Placement::Here,
            Placement::Top,
            Placement::Bottom,
            Placement::Page,
        ] {
            assert_eq!(placement.to_string().parse::<Placement>().unwrap(), placement);
        }
    }

    #[test]
    fn test_caption_position_aliases() {
        assert_eq!("TOP".parse::<CaptionPosition>().unwrap(), CaptionPosition::Top);
        assert_eq!("下".parse::<CaptionPosition>().unwrap(), CaptionPosition::Bottom);
        assert!("middle".parse::<CaptionPosition>().is_err());
    }

    #[test]
    fn test_render_options_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.placement, Placement::Here);
        assert_eq!(opts.caption_position, CaptionPosition::Top);
        assert!(!opts.left_centered);
    }

    #[test]
    fn test_options_deserialize_partial() {
        let opts: RenderOptions =
            serde_json::from_str(r#"{"caption": "Results", "placement": "t"}"#).unwrap();
        assert_eq!(opts.caption, "Results");
        assert_eq!(opts.placement, Placement::Top);
        assert_eq!(opts.caption_position, CaptionPosition::Top);

        let opts: ComplexOptions = serde_json::from_str(r#"{"placement": null}"#).unwrap();
        assert_eq!(opts.placement, None);
    }

    #[test]
    fn test_blank_complex_placement_is_none() {
        for json in [r#"{"placement": ""}"#, r#"{"placement": "  "}"#, "{}"] {
            let opts: ComplexOptions = serde_json::from_str(json).unwrap();
            assert_eq!(opts.placement, None, "{json}");
        }
        let opts: ComplexOptions = serde_json::from_str(r#"{"placement": "b"}"#).unwrap();
        assert_eq!(opts.placement, Some(Placement::Bottom));
        assert!(serde_json::from_str::<ComplexOptions>(r#"{"placement": "x"}"#).is_err());
    }

    #[test]
    fn test_parse_optional_placement() {
        assert_eq!(Placement::parse_optional("").unwrap(), None);
        assert_eq!(Placement::parse_optional(" t ").unwrap(), Some(Placement::Top));
        assert!(matches!(
            Placement::parse_optional("q"),
            Err(TableError::InvalidPlacement(_))
        ));
    }
}
