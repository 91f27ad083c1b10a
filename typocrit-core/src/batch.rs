//! Batch analysis pipeline over document-spec files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

use crate::discovery::{DocumentDiscovery, PathDiscovery};
use crate::element::{FontDescriptor, ProjectContext, TypographyElement};
use crate::hierarchy::evaluate_hierarchy;
use crate::pairing::analyze_pairing;
use crate::readability::assess_readability;
use crate::rules::RuleSet;
use crate::synthesis::{synthesize, AgentMode, AnalysisResult};

#[derive(Debug, Default, Clone)]
pub struct BatchOptions {
    pub follow_symlinks: bool,
    /// Bound the worker pool; `None` uses the global pool.
    pub jobs: Option<usize>,
}

/// Full analysis of one document spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub pairing_score: f64,
    pub readability_score: f64,
    pub hierarchy_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ProjectContext>,
    pub results: Vec<AnalysisResult>,
}

/// A document spec is either a bare element array or an object carrying
/// elements plus optional project context.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DocumentSpec {
    Elements(Vec<TypographyElement>),
    Annotated {
        elements: Vec<TypographyElement>,
        #[serde(default)]
        context: Option<ProjectContext>,
    },
}

/// Parse a document spec from raw JSON text.
pub fn parse_document(raw: &str) -> Result<(Vec<TypographyElement>, Option<ProjectContext>)> {
    let spec: DocumentSpec = serde_json::from_str(raw).context("parsing document spec")?;
    Ok(match spec {
        DocumentSpec::Elements(elements) => (elements, None),
        DocumentSpec::Annotated { elements, context } => (elements, context),
    })
}

/// Load and parse a document spec from disk.
pub fn load_document(path: &Path) -> Result<(Vec<TypographyElement>, Option<ProjectContext>)> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading document {}", path.display()))?;
    parse_document(&raw).with_context(|| format!("in document {}", path.display()))
}

/// Analyze one document file end to end.
pub fn analyze_document(path: &Path, mode: AgentMode, rules: &RuleSet) -> Result<DocumentReport> {
    let (elements, context) = load_document(path)?;

    let fonts: Vec<FontDescriptor> = elements.iter().map(FontDescriptor::from).collect();
    let pairing = analyze_pairing(&fonts, rules);
    let readability = assess_readability(&elements, rules);
    let hierarchy = evaluate_hierarchy(&elements, rules);
    let results = synthesize(&pairing, &readability, &hierarchy, mode);

    Ok(DocumentReport {
        path: path.to_path_buf(),
        pairing_score: pairing.score,
        readability_score: readability.score,
        hierarchy_score: hierarchy.score,
        context,
        results,
    })
}

/// Discover document specs under the given roots and analyze them in
/// parallel. Reports come back sorted by path for stable output.
pub fn analyze_paths(
    paths: &[PathBuf],
    mode: AgentMode,
    rules: &RuleSet,
    opts: &BatchOptions,
) -> Result<Vec<DocumentReport>> {
    let discovery = PathDiscovery::new(paths.iter().cloned()).follow_symlinks(opts.follow_symlinks);
    let documents = discovery.discover()?;

    let run_batch = || -> Result<Vec<DocumentReport>> {
        let mut reports: Vec<DocumentReport> = documents
            .par_iter()
            .map(|doc| analyze_document(&doc.path, mode, rules))
            .collect::<Result<Vec<_>>>()?;

        reports.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(reports)
    };

    if let Some(jobs) = opts.jobs {
        let pool = ThreadPoolBuilder::new().num_threads(jobs).build()?;
        pool.install(run_batch)
    } else {
        run_batch()
    }
}
