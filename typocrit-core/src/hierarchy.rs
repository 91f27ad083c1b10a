//! Visual hierarchy scoring: size progression, weight and color variety

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::element::TypographyElement;
use crate::rules::RuleSet;

const RATIO_CONTRIBUTION: f64 = 0.4;
const WEIGHT_CONTRIBUTION: f64 = 0.3;
const COLOR_CONTRIBUTION: f64 = 0.3;

/// Score returned when there are not enough elements to judge contrast.
const INSUFFICIENT_SCORE: f64 = 0.5;

/// Outcome of a hierarchy evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyReport {
    pub score: f64,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    /// Consecutive size ratios, largest element first.
    pub size_ratios: Vec<f64>,
    /// Count of distinct font sizes (diagnostic, not scored).
    pub hierarchy_levels: usize,
}

/// Evaluate how clearly the elements establish a visual hierarchy.
///
/// Needs at least two elements; with fewer there is no contrast to judge and
/// the result is a fixed neutral score.
pub fn evaluate_hierarchy(elements: &[TypographyElement], rules: &RuleSet) -> HierarchyReport {
    if elements.len() < 2 {
        return HierarchyReport {
            score: INSUFFICIENT_SCORE,
            feedback: vec!["Insufficient elements for hierarchy analysis".to_string()],
            suggestions: Vec::new(),
            size_ratios: Vec::new(),
            hierarchy_levels: distinct_sizes(elements),
        };
    }

    // Stable sort keeps the original relative order of equal sizes.
    let mut sorted: Vec<&TypographyElement> = elements.iter().collect();
    sorted.sort_by(|a, b| {
        b.font_size
            .partial_cmp(&a.font_size)
            .unwrap_or(Ordering::Equal)
    });

    let size_ratios: Vec<f64> = sorted
        .windows(2)
        .map(|pair| {
            let next = pair[1].font_size;
            if next > 0.0 {
                pair[0].font_size / next
            } else {
                1.0
            }
        })
        .collect();

    let mut score = 0.0;
    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();

    if size_ratios
        .iter()
        .all(|ratio| rules.hierarchy.is_good_ratio(*ratio))
    {
        score += RATIO_CONTRIBUTION;
        feedback.push("Font size hierarchy is well-established".to_string());
    } else {
        feedback.push("Font size hierarchy could be improved".to_string());
        suggestions.push(
            "Use consistent size ratios (1.25x, 1.5x, 2x) between hierarchy levels".to_string(),
        );
    }

    let weights: HashSet<_> = elements.iter().map(|e| e.font_weight).collect();
    if weights.len() > 1 {
        score += WEIGHT_CONTRIBUTION;
        feedback.push("Font weight variation supports hierarchy".to_string());
    } else {
        feedback.push("Consider using different font weights to enhance hierarchy".to_string());
        suggestions.push(
            "Add weight variation (regular, medium, bold) to create clear hierarchy".to_string(),
        );
    }

    // Raw string comparison; no hex normalization.
    let colors: HashSet<&str> = elements.iter().map(|e| e.color.as_str()).collect();
    if colors.len() > 1 {
        score += COLOR_CONTRIBUTION;
        feedback.push("Color variation enhances hierarchy".to_string());
    } else {
        feedback.push("Color variation could strengthen hierarchy".to_string());
        suggestions
            .push("Consider using different shades or colors for hierarchy levels".to_string());
    }

    HierarchyReport {
        score: score.clamp(0.0, 1.0),
        feedback,
        suggestions,
        size_ratios,
        hierarchy_levels: distinct_sizes(elements),
    }
}

fn distinct_sizes(elements: &[TypographyElement]) -> usize {
    elements
        .iter()
        .map(|e| e.font_size.to_bits())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::FontWeight;

    fn element(size: f64, weight: FontWeight, color: &str) -> TypographyElement {
        TypographyElement {
            font_size: size,
            font_weight: weight,
            color: color.to_string(),
            ..TypographyElement::default()
        }
    }

    #[test]
    fn fewer_than_two_elements_is_neutral() {
        let rules = RuleSet::builtin();

        for elements in [Vec::new(), vec![element(12.0, FontWeight::Regular, "#000000")]] {
            let report = evaluate_hierarchy(&elements, &rules);
            assert_eq!(report.score, 0.5);
            assert_eq!(
                report.feedback,
                vec!["Insufficient elements for hierarchy analysis"]
            );
            assert!(report.suggestions.is_empty());
            assert!(report.size_ratios.is_empty());
        }
    }

    #[test]
    fn clean_scale_with_variety_scores_full_marks() {
        let rules = RuleSet::builtin();
        let report = evaluate_hierarchy(
            &[
                element(24.0, FontWeight::Bold, "#000000"),
                element(16.0, FontWeight::Medium, "#333333"),
                element(12.0, FontWeight::Regular, "#666666"),
            ],
            &rules,
        );

        assert_eq!(report.score, 1.0);
        assert_eq!(report.size_ratios, vec![1.5, 16.0 / 12.0]);
        assert_eq!(report.hierarchy_levels, 3);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn off_scale_ratio_breaks_the_ratio_check() {
        let rules = RuleSet::builtin();
        // 12 over 11.4 is roughly 1.05: not a scale stop, below the band.
        let report = evaluate_hierarchy(
            &[
                element(24.0, FontWeight::Bold, "#000000"),
                element(12.0, FontWeight::Regular, "#333333"),
                element(11.4, FontWeight::Regular, "#666666"),
            ],
            &rules,
        );

        assert!((report.score - 0.6).abs() < 1e-12, "ratio contribution lost");
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("consistent size ratios")));
    }

    #[test]
    fn tie_ratio_of_exactly_one_is_a_scale_stop() {
        let rules = RuleSet::builtin();
        // Sizes [24, 12, 12] → ratios [2.0, 1.0]; both qualify because 1.0
        // sits on the canonical scale even though it is below the band.
        let report = evaluate_hierarchy(
            &[
                element(24.0, FontWeight::Bold, "#000000"),
                element(12.0, FontWeight::Regular, "#333333"),
                element(12.0, FontWeight::Regular, "#666666"),
            ],
            &rules,
        );

        assert_eq!(report.size_ratios, vec![2.0, 1.0]);
        assert!((report.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn uniform_weights_and_colors_lose_their_contributions() {
        let rules = RuleSet::builtin();
        let report = evaluate_hierarchy(
            &[
                element(24.0, FontWeight::Regular, "#000000"),
                element(12.0, FontWeight::Regular, "#000000"),
            ],
            &rules,
        );

        assert!((report.score - 0.4).abs() < 1e-12);
        assert_eq!(report.suggestions.len(), 2);
    }

    #[test]
    fn zero_size_denominator_defaults_ratio_to_one() {
        let rules = RuleSet::builtin();
        let report = evaluate_hierarchy(
            &[
                element(24.0, FontWeight::Bold, "#000000"),
                element(0.0, FontWeight::Regular, "#333333"),
            ],
            &rules,
        );

        assert_eq!(report.size_ratios, vec![1.0]);
    }

    #[test]
    fn hierarchy_levels_counts_distinct_sizes() {
        let rules = RuleSet::builtin();
        let report = evaluate_hierarchy(
            &[
                element(24.0, FontWeight::Bold, "#000000"),
                element(12.0, FontWeight::Regular, "#333333"),
                element(12.0, FontWeight::Regular, "#666666"),
            ],
            &rules,
        );

        assert_eq!(report.hierarchy_levels, 2);
    }
}
