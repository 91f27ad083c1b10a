//! Severity gating and mode-dependent feedback rendering

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

use crate::element::{FontDescriptor, TypographyElement};
use crate::hierarchy::{evaluate_hierarchy, HierarchyReport};
use crate::pairing::{analyze_pairing, PairingReport};
use crate::readability::{assess_readability, ReadabilityReport};
use crate::rules::RuleSet;

/// Scores at or above this emit no result at all.
const SCORE_GATE: f64 = 0.7;
/// Scores below this escalate from info to warning.
const WARNING_BELOW: f64 = 0.5;

const PAIRING_PRINCIPLE: &str =
    "Effective font pairing creates harmony while maintaining distinction between text elements.";
const READABILITY_PRINCIPLE: &str =
    "Optimal readability ensures your message reaches the audience effectively.";
const HIERARCHY_PRINCIPLE: &str =
    "Clear hierarchy guides readers through content in order of importance.";

/// Feedback voice. Selects phrasing only; scores never change across modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    /// Direct, consequence-focused phrasing.
    Critic,
    /// Educational phrasing that carries the underlying principle.
    #[default]
    Guide,
    /// Action-oriented phrasing.
    Helper,
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentMode::Critic => "critic",
            AgentMode::Guide => "guide",
            AgentMode::Helper => "helper",
        };
        f.write_str(name)
    }
}

impl FromStr for AgentMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "critic" => Ok(AgentMode::Critic),
            "guide" => Ok(AgentMode::Guide),
            "helper" => Ok(AgentMode::Helper),
            other => Err(anyhow!(
                "unknown agent mode: {other} (expected critic, guide, or helper)"
            )),
        }
    }
}

/// Advisory urgency of a result, independent of its confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// Typography task a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Kerning,
    Alignment,
    Hierarchy,
    Consistency,
    Readability,
    Automation,
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskType::Kerning => "kerning",
            TaskType::Alignment => "alignment",
            TaskType::Hierarchy => "hierarchy",
            TaskType::Consistency => "consistency",
            TaskType::Readability => "readability",
            TaskType::Automation => "automation",
        };
        f.write_str(name)
    }
}

/// One severity-tagged finding from the synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub task_type: TaskType,
    pub severity: Severity,
    pub message: String,
    pub suggestions: Vec<String>,
    pub auto_fix_available: bool,
    /// The underlying sub-score, surfaced verbatim.
    pub confidence_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography_principle: Option<String>,
}

/// Combine the three sub-analyses into an ordered, severity-tagged result
/// list. Results appear in fixed order (consistency, readability, hierarchy)
/// and only for scores below the gate.
pub fn synthesize(
    pairing: &PairingReport,
    readability: &ReadabilityReport,
    hierarchy: &HierarchyReport,
    mode: AgentMode,
) -> Vec<AnalysisResult> {
    let mut results = Vec::new();

    if pairing.score < SCORE_GATE {
        let (message, principle) =
            render(mode, "Font pairing needs attention", PAIRING_PRINCIPLE, true);
        results.push(AnalysisResult {
            task_type: TaskType::Consistency,
            severity: severity_for(pairing.score),
            message,
            suggestions: pairing.suggestions.clone(),
            auto_fix_available: true,
            confidence_score: pairing.score,
            typography_principle: principle,
        });
    }

    if readability.score < SCORE_GATE {
        let (message, principle) = render(
            mode,
            "Readability could be improved",
            READABILITY_PRINCIPLE,
            true,
        );
        results.push(AnalysisResult {
            task_type: TaskType::Readability,
            severity: severity_for(readability.score),
            message,
            suggestions: readability.suggestions.clone(),
            auto_fix_available: true,
            confidence_score: readability.score,
            typography_principle: principle,
        });
    }

    if hierarchy.score < SCORE_GATE {
        let (message, principle) = render(
            mode,
            "Visual hierarchy can be strengthened",
            HIERARCHY_PRINCIPLE,
            false,
        );
        // Hierarchy fixes need design judgment, not a mechanical transform.
        results.push(AnalysisResult {
            task_type: TaskType::Hierarchy,
            severity: Severity::Info,
            message,
            suggestions: hierarchy.suggestions.clone(),
            auto_fix_available: false,
            confidence_score: hierarchy.score,
            typography_principle: principle,
        });
    }

    results
}

/// Run all three scorers over one element list and synthesize the findings.
/// The elements double as the pairing descriptors, first element primary.
pub fn analyze_elements(
    elements: &[TypographyElement],
    mode: AgentMode,
    rules: &RuleSet,
) -> Vec<AnalysisResult> {
    let fonts: Vec<FontDescriptor> = elements.iter().map(FontDescriptor::from).collect();

    let pairing = analyze_pairing(&fonts, rules);
    let readability = assess_readability(elements, rules);
    let hierarchy = evaluate_hierarchy(elements, rules);

    synthesize(&pairing, &readability, &hierarchy, mode)
}

fn severity_for(score: f64) -> Severity {
    if score < WARNING_BELOW {
        Severity::Warning
    } else {
        Severity::Info
    }
}

/// Purely textual rendering; the caller owns severity, suggestions and score.
fn render(
    mode: AgentMode,
    base: &str,
    principle: &str,
    auto_fix: bool,
) -> (String, Option<String>) {
    match mode {
        AgentMode::Critic => (
            format!(
                "Critical assessment: {base}. This impacts the overall design quality and should be addressed."
            ),
            None,
        ),
        AgentMode::Guide => (
            format!("Typography guidance: {base}. {principle}"),
            Some(principle.to_string()),
        ),
        AgentMode::Helper => {
            let message = if auto_fix {
                format!("Quick fix available: {base}. I can apply this adjustment automatically.")
            } else {
                format!("Action plan: {base}. The suggestions below are the manual starting point.")
            };
            (message, None)
        }
    }
}
