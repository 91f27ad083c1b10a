//! Static rule tables: compatibility matrix, readability thresholds, hierarchy scale

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::element::FontCategory;

/// Tolerance for matching a computed ratio against a scale stop.
const RATIO_EPSILON: f64 = 1e-9;

/// Named numeric range used identically by every readability check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
}

impl ThresholdRule {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Pairing guidance for one primary category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityEntry {
    pub compatible: Vec<FontCategory>,
    pub avoid: Vec<FontCategory>,
    /// Family names worth suggesting alongside this category.
    pub best_pairs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityRules {
    pub font_size: ThresholdRule,
    pub line_height: ThresholdRule,
    pub character_spacing: ThresholdRule,
    pub line_length: ThresholdRule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyRules {
    /// Canonical type-scale stops.
    pub size_ratios: Vec<f64>,
    /// Inclusive band of ratios accepted outside the canonical stops.
    pub band_min: f64,
    pub band_max: f64,
}

impl HierarchyRules {
    /// A ratio qualifies if it sits on a scale stop or inside the band.
    /// Both checks are kept deliberately even though the band covers most
    /// of the scale.
    pub fn is_good_ratio(&self, ratio: f64) -> bool {
        self.size_ratios
            .iter()
            .any(|stop| (stop - ratio).abs() < RATIO_EPSILON)
            || (self.band_min <= ratio && ratio <= self.band_max)
    }
}

/// Keyword lists consulted by the categorizer, in match priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub serif: Vec<String>,
    pub sans_serif: Vec<String>,
    pub script: Vec<String>,
    pub monospace: Vec<String>,
}

/// The complete immutable rule set the scorers run against.
///
/// Build it once at startup with [`RuleSet::builtin`] (or load a deployment
/// override with [`RuleSet::from_path`]) and pass it by reference into every
/// call. There are no setters; swapping rules means swapping the whole set
/// between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub keywords: CategoryKeywords,
    pub compatibility: BTreeMap<FontCategory, CompatibilityEntry>,
    pub readability: ReadabilityRules,
    pub hierarchy: HierarchyRules,
}

impl RuleSet {
    /// The built-in tables.
    pub fn builtin() -> Self {
        let keywords = CategoryKeywords {
            serif: strings(&["times", "georgia", "minion", "garamond", "baskerville", "caslon"]),
            sans_serif: strings(&["helvetica", "arial", "futura", "avenir", "proxima", "gotham"]),
            script: strings(&["script", "brush", "handwriting", "calligraphy"]),
            monospace: strings(&["courier", "monaco", "consolas", "menlo", "monospace"]),
        };

        let mut compatibility = BTreeMap::new();
        compatibility.insert(
            FontCategory::Serif,
            CompatibilityEntry {
                compatible: vec![
                    FontCategory::SansSerif,
                    FontCategory::Script,
                    FontCategory::Monospace,
                ],
                avoid: vec![FontCategory::Decorative],
                best_pairs: strings(&["Helvetica", "Arial", "Futura"]),
            },
        );
        compatibility.insert(
            FontCategory::SansSerif,
            CompatibilityEntry {
                compatible: vec![
                    FontCategory::Serif,
                    FontCategory::Monospace,
                    FontCategory::Script,
                ],
                avoid: vec![FontCategory::Decorative],
                best_pairs: strings(&["Times New Roman", "Georgia", "Minion Pro"]),
            },
        );
        compatibility.insert(
            FontCategory::Script,
            CompatibilityEntry {
                compatible: vec![FontCategory::Serif, FontCategory::SansSerif],
                avoid: vec![FontCategory::Script, FontCategory::Decorative],
                best_pairs: strings(&["Times New Roman", "Helvetica"]),
            },
        );
        compatibility.insert(
            FontCategory::Monospace,
            CompatibilityEntry {
                compatible: vec![FontCategory::Serif, FontCategory::SansSerif],
                avoid: vec![FontCategory::Script, FontCategory::Decorative],
                best_pairs: strings(&["Helvetica", "Times New Roman"]),
            },
        );

        let readability = ReadabilityRules {
            font_size: ThresholdRule {
                min: 9.0,
                max: 14.0,
                optimal: 11.0,
            },
            line_height: ThresholdRule {
                min: 1.2,
                max: 1.8,
                optimal: 1.4,
            },
            character_spacing: ThresholdRule {
                min: -0.05,
                max: 0.2,
                optimal: 0.0,
            },
            line_length: ThresholdRule {
                min: 45.0,
                max: 75.0,
                optimal: 60.0,
            },
        };

        let hierarchy = HierarchyRules {
            size_ratios: vec![1.0, 1.125, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 3.0],
            band_min: 1.1,
            band_max: 3.0,
        };

        RuleSet {
            keywords,
            compatibility,
            readability,
            hierarchy,
        }
    }

    /// Load a rule-set override from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data =
            fs::read(path).with_context(|| format!("reading rule set {}", path.display()))?;
        serde_json::from_slice(&data)
            .with_context(|| format!("parsing rule set {}", path.display()))
    }

    /// Classify a family name by keyword membership.
    ///
    /// Checks serif, sans-serif, script, then monospace keywords; the first
    /// match wins. Unmatched names fall back to sans-serif rather than
    /// failing.
    pub fn categorize(&self, family: &str) -> FontCategory {
        let family = family.to_lowercase();

        let ordered = [
            (FontCategory::Serif, &self.keywords.serif),
            (FontCategory::SansSerif, &self.keywords.sans_serif),
            (FontCategory::Script, &self.keywords.script),
            (FontCategory::Monospace, &self.keywords.monospace),
        ];

        for (category, keywords) in ordered {
            if keywords.iter().any(|keyword| family.contains(keyword)) {
                return category;
            }
        }

        FontCategory::SansSerif
    }

    /// Pairing guidance for a primary category, if the table carries one.
    pub fn compatibility_for(&self, category: FontCategory) -> Option<&CompatibilityEntry> {
        self.compatibility.get(&category)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
