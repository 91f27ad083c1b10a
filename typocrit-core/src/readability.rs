//! Readability scoring against size, leading, tracking and measure thresholds

use serde::{Deserialize, Serialize};

use crate::element::TypographyElement;
use crate::rules::RuleSet;

/// Weight of each of the four per-element checks.
const CHECK_WEIGHT: f64 = 0.25;

/// Outcome of a readability assessment over a list of elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub score: f64,
    /// One entry per failing check per element; not deduplicated, so the
    /// full audit trail survives aggregation.
    pub feedback: Vec<String>,
    /// Deduplicated, first occurrence wins.
    pub suggestions: Vec<String>,
    pub elements_analyzed: usize,
}

/// Score each element on font size, line height, character spacing and line
/// length, then average. An empty list scores 0.0 rather than dividing by
/// zero.
pub fn assess_readability(elements: &[TypographyElement], rules: &RuleSet) -> ReadabilityReport {
    let thresholds = &rules.readability;

    let mut total = 0.0;
    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();

    for element in elements {
        let mut element_score = 0.0;

        if thresholds.font_size.contains(element.font_size) {
            element_score += CHECK_WEIGHT;
        } else {
            feedback.push(format!(
                "Font size {}pt may impact readability",
                element.font_size
            ));
            if element.font_size < thresholds.font_size.min {
                push_unique(
                    &mut suggestions,
                    format!("Increase font size to at least {}pt", thresholds.font_size.min),
                );
            } else {
                push_unique(
                    &mut suggestions,
                    format!(
                        "Consider reducing font size to {}pt for body text",
                        thresholds.font_size.optimal
                    ),
                );
            }
        }

        if thresholds.line_height.contains(element.line_height) {
            element_score += CHECK_WEIGHT;
        } else {
            feedback.push(format!(
                "Line height {} is outside the optimal range",
                element.line_height
            ));
            push_unique(
                &mut suggestions,
                format!("Adjust line height to {}", thresholds.line_height.optimal),
            );
        }

        if thresholds.character_spacing.contains(element.character_spacing) {
            element_score += CHECK_WEIGHT;
        } else {
            feedback.push(format!(
                "Character spacing {} may affect readability",
                element.character_spacing
            ));
            push_unique(
                &mut suggestions,
                "Adjust character spacing to improve text flow".to_string(),
            );
        }

        if thresholds.line_length.contains(element.line_length as f64) {
            element_score += CHECK_WEIGHT;
        } else {
            feedback.push(format!(
                "Line length {} characters is outside the optimal range",
                element.line_length
            ));
            push_unique(
                &mut suggestions,
                format!("Aim for {} characters per line", thresholds.line_length.optimal),
            );
        }

        total += element_score;
    }

    let score = if elements.is_empty() {
        0.0
    } else {
        total / elements.len() as f64
    };

    ReadabilityReport {
        score,
        feedback,
        suggestions,
        elements_analyzed: elements.len(),
    }
}

fn push_unique(suggestions: &mut Vec<String>, suggestion: String) {
    if !suggestions.contains(&suggestion) {
        suggestions.push(suggestion);
    }
}
