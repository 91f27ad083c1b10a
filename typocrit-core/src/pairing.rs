//! Font pairing compatibility scoring

use serde::{Deserialize, Serialize};

use crate::element::{FontCategory, FontDescriptor};
use crate::rules::RuleSet;

const COMPATIBLE_CONTRIBUTION: f64 = 0.8;
const NEUTRAL_CONTRIBUTION: f64 = 0.5;
const AVOID_CONTRIBUTION: f64 = 0.2;

/// Outcome of a pairing analysis over an ordered font list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairingReport {
    pub score: f64,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    /// Category of the first font; absent when there was nothing to pair.
    pub primary_category: Option<FontCategory>,
    /// The primary category's recommended companions, verbatim from the table.
    pub recommended_pairs: Vec<String>,
}

/// Score how well the fonts sit together.
///
/// The first font is the primary; every later font is judged against the
/// primary category's compatibility entry. Fewer than two fonts is trivially
/// consistent and scores 1.0.
pub fn analyze_pairing(fonts: &[FontDescriptor], rules: &RuleSet) -> PairingReport {
    if fonts.len() < 2 {
        return PairingReport {
            score: 1.0,
            feedback: vec!["Single font detected".to_string()],
            suggestions: Vec::new(),
            primary_category: None,
            recommended_pairs: Vec::new(),
        };
    }

    let primary = &fonts[0];
    let secondaries = &fonts[1..];
    let primary_category = resolve_category(primary, rules);
    let entry = rules.compatibility_for(primary_category);

    let mut total = 0.0;
    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();

    for secondary in secondaries {
        let secondary_category = resolve_category(secondary, rules);
        let (compatible, avoided) = match entry {
            Some(entry) => (
                entry.compatible.contains(&secondary_category),
                entry.avoid.contains(&secondary_category),
            ),
            // A primary without a table entry judges everything neutral.
            None => (false, false),
        };

        if compatible {
            total += COMPATIBLE_CONTRIBUTION;
            feedback.push(format!(
                "Good pairing: {} with {}",
                primary.family, secondary.family
            ));
        } else if avoided {
            total += AVOID_CONTRIBUTION;
            feedback.push(format!(
                "Potentially problematic pairing: {} with {}",
                primary.family, secondary.family
            ));
            suggestions.push(format!(
                "Consider replacing {} with a {primary_category}-compatible font",
                secondary.family
            ));
        } else {
            total += NEUTRAL_CONTRIBUTION;
            feedback.push(format!(
                "Neutral pairing: {} with {}",
                primary.family, secondary.family
            ));
        }
    }

    let score = (total / secondaries.len() as f64).min(1.0);
    let recommended_pairs = entry.map(|e| e.best_pairs.clone()).unwrap_or_default();

    PairingReport {
        score,
        feedback,
        suggestions,
        primary_category: Some(primary_category),
        recommended_pairs,
    }
}

fn resolve_category(font: &FontDescriptor, rules: &RuleSet) -> FontCategory {
    font.category
        .unwrap_or_else(|| rules.categorize(&font.family))
}
