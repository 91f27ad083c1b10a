//! Input data model: typography elements and font descriptors

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// Closed font-weight vocabulary, lightest to heaviest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontWeight::Light => "light",
            FontWeight::Regular => "regular",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        };
        f.write_str(name)
    }
}

/// Broad stylistic category a font family falls into.
///
/// Derived by the categorizer, never stored on elements. Decorative is
/// recognised in compatibility avoid-lists but never produced by
/// categorization itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FontCategory {
    Serif,
    SansSerif,
    Script,
    Monospace,
    Decorative,
}

impl fmt::Display for FontCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontCategory::Serif => "serif",
            FontCategory::SansSerif => "sans-serif",
            FontCategory::Script => "script",
            FontCategory::Monospace => "monospace",
            FontCategory::Decorative => "decorative",
        };
        f.write_str(name)
    }
}

impl FromStr for FontCategory {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "serif" => Ok(FontCategory::Serif),
            "sans-serif" => Ok(FontCategory::SansSerif),
            "script" => Ok(FontCategory::Script),
            "monospace" => Ok(FontCategory::Monospace),
            "decorative" => Ok(FontCategory::Decorative),
            other => Err(anyhow!("unknown font category: {other}")),
        }
    }
}

/// One styled run of text as captured from a layout.
///
/// Field names follow the camelCase wire shape used by design-tool exports.
/// Missing fields fall back to the documented defaults; the engine never
/// mutates an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyElement {
    pub family: String,
    /// Point size.
    pub font_size: f64,
    pub font_weight: FontWeight,
    /// Line height as a ratio of the font size.
    pub line_height: f64,
    /// Tracking as a signed ratio of the em.
    pub character_spacing: f64,
    /// Hex color string.
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Estimated characters per line.
    pub line_length: u32,
}

impl Default for TypographyElement {
    fn default() -> Self {
        Self {
            family: String::new(),
            font_size: 12.0,
            font_weight: FontWeight::Regular,
            line_height: 1.2,
            character_spacing: 0.0,
            color: "#000000".to_string(),
            text: None,
            line_length: 60,
        }
    }
}

/// Pairing input: a family name plus an optional caller-supplied category.
///
/// When `category` is present it overrides keyword categorization; the
/// caller presumably knows the font better than our keyword lists do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FontCategory>,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            category: None,
        }
    }
}

impl From<&TypographyElement> for FontDescriptor {
    fn from(element: &TypographyElement) -> Self {
        FontDescriptor::new(element.family.clone())
    }
}

/// Project metadata attached to an analysis request.
///
/// Passed through for bookkeeping and downstream consumers; it never
/// influences any score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Target medium, e.g. "print" or "digital".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_guidelines: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_defaults_match_documented_values() {
        let element = TypographyElement::default();

        assert_eq!(element.font_size, 12.0);
        assert_eq!(element.font_weight, FontWeight::Regular);
        assert_eq!(element.line_height, 1.2);
        assert_eq!(element.character_spacing, 0.0);
        assert_eq!(element.color, "#000000");
        assert_eq!(element.line_length, 60);
    }

    #[test]
    fn element_deserializes_camel_case_with_missing_fields() {
        let element: TypographyElement =
            serde_json::from_str(r#"{"family": "Georgia", "fontSize": 18, "fontWeight": "bold"}"#)
                .expect("parse element");

        assert_eq!(element.family, "Georgia");
        assert_eq!(element.font_size, 18.0);
        assert_eq!(element.font_weight, FontWeight::Bold);
        assert_eq!(element.line_height, 1.2, "missing fields take defaults");
    }

    #[test]
    fn category_round_trips_kebab_case() {
        let parsed: FontCategory = serde_json::from_str("\"sans-serif\"").expect("parse");
        assert_eq!(parsed, FontCategory::SansSerif);
        assert_eq!(parsed.to_string(), "sans-serif");
        assert_eq!("monospace".parse::<FontCategory>().unwrap(), FontCategory::Monospace);
        assert!("grotesque".parse::<FontCategory>().is_err());
    }

    #[test]
    fn unknown_font_weight_is_rejected() {
        let parsed = serde_json::from_str::<FontWeight>("\"heavy\"");
        assert!(parsed.is_err());
    }
}
