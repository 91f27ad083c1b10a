//! typocrit CLI

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use typocrit_core::batch::{analyze_paths, parse_document, BatchOptions, DocumentReport};
use typocrit_core::element::FontDescriptor;
use typocrit_core::hierarchy::{evaluate_hierarchy, HierarchyReport};
use typocrit_core::output::{write_json_pretty, write_ndjson};
use typocrit_core::pairing::{analyze_pairing, PairingReport};
use typocrit_core::readability::{assess_readability, ReadabilityReport};
use typocrit_core::rules::RuleSet;
use typocrit_core::synthesis::{analyze_elements, AgentMode, AnalysisResult, Severity};

pub mod server;

/// CLI entrypoint for typocrit.
#[derive(Debug, Parser)]
#[command(
    name = "typocrit",
    about = "Typography analysis: font pairing, readability and hierarchy feedback"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the combined analysis over a document spec
    Analyze(AnalyzeArgs),
    /// Score font-pairing compatibility for a list of families
    Pairing(PairingArgs),
    /// Assess readability of a document spec
    Readability(ElementsArgs),
    /// Evaluate visual hierarchy of a document spec
    Hierarchy(ElementsArgs),
    /// Analyze every document spec found under the given paths
    Batch(BatchArgs),
    /// Serve the analysis tools over HTTP
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Document spec to read (JSON file, or `-` for STDIN)
    input: Option<PathBuf>,

    /// Feedback voice
    #[arg(short = 'm', long = "mode", default_value_t = ModeArg::Guide, value_enum)]
    mode: ModeArg,

    /// Rule-set override (falls back to TYPOCRIT_RULES, then built-ins)
    #[arg(long = "rules")]
    rules: Option<PathBuf>,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct PairingArgs {
    /// Font family names, primary first
    #[arg(required = true)]
    families: Vec<String>,

    /// Rule-set override (falls back to TYPOCRIT_RULES, then built-ins)
    #[arg(long = "rules")]
    rules: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct ElementsArgs {
    /// Document spec to read (JSON file, or `-` for STDIN)
    input: Option<PathBuf>,

    /// Rule-set override (falls back to TYPOCRIT_RULES, then built-ins)
    #[arg(long = "rules")]
    rules: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Directories or files to scan for document specs
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Feedback voice
    #[arg(short = 'm', long = "mode", default_value_t = ModeArg::Guide, value_enum)]
    mode: ModeArg,

    /// Number of parallel workers
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,

    /// Follow symlinks while walking paths
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    follow_symlinks: bool,

    /// Rule-set override (falls back to TYPOCRIT_RULES, then built-ins)
    #[arg(long = "rules")]
    rules: Option<PathBuf>,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Address to bind, e.g. 127.0.0.1:8787
    #[arg(long = "bind", default_value = "127.0.0.1:8787")]
    bind: String,

    /// Rule-set override (falls back to TYPOCRIT_RULES, then built-ins)
    #[arg(long = "rules")]
    rules: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ModeArg {
    Critic,
    Guide,
    Helper,
}

impl ModeArg {
    fn to_mode(self) -> AgentMode {
        match self {
            ModeArg::Critic => AgentMode::Critic,
            ModeArg::Guide => AgentMode::Guide,
            ModeArg::Helper => AgentMode::Helper,
        }
    }
}

impl std::fmt::Display for ModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ModeArg::Critic => "critic",
            ModeArg::Guide => "guide",
            ModeArg::Helper => "helper",
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl std::fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        })
    }
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Pairing(args) => run_pairing(args),
        Command::Readability(args) => run_readability(args),
        Command::Hierarchy(args) => run_hierarchy(args),
        Command::Batch(args) => run_batch(args),
        Command::Serve(args) => run_serve(args),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let rules = resolve_rules(&args.rules)?;
    let raw = read_input(args.input.as_deref(), io::stdin().lock())?;
    let (elements, context) = parse_document(&raw)?;

    if let Some(context) = &context {
        tracing::debug!(
            project = context.project_name.as_deref().unwrap_or("unnamed"),
            "analysis context attached"
        );
    }

    let results = analyze_elements(&elements, args.mode.to_mode(), &rules);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = resolve_color(args.color, handle.is_terminal());

    if args.ndjson {
        write_ndjson(&results, &mut handle)?;
    } else if args.json {
        write_json_pretty(&results, &mut handle)?;
    } else {
        write_results_plain(&results, &mut handle, use_color)?;
    }

    Ok(())
}

fn run_pairing(args: PairingArgs) -> Result<()> {
    let rules = resolve_rules(&args.rules)?;
    let fonts: Vec<FontDescriptor> = args.families.iter().map(FontDescriptor::new).collect();
    let report = analyze_pairing(&fonts, &rules);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.json {
        write_report_json(&report, &mut handle)?;
    } else {
        write_pairing_plain(&report, &mut handle)?;
    }

    Ok(())
}

fn run_readability(args: ElementsArgs) -> Result<()> {
    let rules = resolve_rules(&args.rules)?;
    let raw = read_input(args.input.as_deref(), io::stdin().lock())?;
    let (elements, _context) = parse_document(&raw)?;
    let report = assess_readability(&elements, &rules);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.json {
        write_report_json(&report, &mut handle)?;
    } else {
        write_readability_plain(&report, &mut handle)?;
    }

    Ok(())
}

fn run_hierarchy(args: ElementsArgs) -> Result<()> {
    let rules = resolve_rules(&args.rules)?;
    let raw = read_input(args.input.as_deref(), io::stdin().lock())?;
    let (elements, _context) = parse_document(&raw)?;
    let report = evaluate_hierarchy(&elements, &rules);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if args.json {
        write_report_json(&report, &mut handle)?;
    } else {
        write_hierarchy_plain(&report, &mut handle)?;
    }

    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let rules = resolve_rules(&args.rules)?;
    let opts = BatchOptions {
        follow_symlinks: args.follow_symlinks,
        jobs: args.jobs,
    };

    tracing::info!(paths = args.paths.len(), "starting batch analysis");
    let reports = analyze_paths(&args.paths, args.mode.to_mode(), &rules, &opts)?;
    tracing::info!(documents = reports.len(), "batch analysis finished");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = resolve_color(args.color, handle.is_terminal());

    if args.ndjson {
        write_ndjson(&reports, &mut handle)?;
    } else if args.json {
        write_json_pretty(&reports, &mut handle)?;
    } else {
        write_batch_columns(&reports, &mut handle, use_color)?;
    }

    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let rules = Arc::new(resolve_rules(&args.rules)?);
    let runtime = tokio::runtime::Runtime::new().context("building tokio runtime")?;
    runtime.block_on(server::serve(&args.bind, rules))
}

/// Load the rule tables: explicit flag first, then the TYPOCRIT_RULES env
/// var, then the built-ins.
fn resolve_rules(explicit: &Option<PathBuf>) -> Result<RuleSet> {
    if let Some(path) = explicit {
        return RuleSet::from_path(path);
    }

    if let Ok(raw) = env::var("TYPOCRIT_RULES") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return RuleSet::from_path(Path::new(trimmed));
        }
    }

    Ok(RuleSet::builtin())
}

/// Read a document spec from a file, or from stdin when the path is absent
/// or the `-` placeholder.
fn read_input(input: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn resolve_color(choice: ColorChoice, is_terminal: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_terminal,
    }
}

/// Write a single report as prettified JSON.
fn write_report_json<T: serde::Serialize>(report: &T, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

fn write_results_plain(
    results: &[AnalysisResult],
    mut w: impl Write,
    color: bool,
) -> Result<()> {
    if results.is_empty() {
        writeln!(w, "All clear: no typography issues flagged.")?;
        return Ok(());
    }

    for result in results {
        let tag = apply_color(
            &format!("[{}]", result.severity),
            color,
            severity_color(result.severity),
        );
        writeln!(
            w,
            "{tag} {}: {} (confidence {:.2})",
            result.task_type, result.message, result.confidence_score
        )?;
        for suggestion in &result.suggestions {
            writeln!(w, "    - {suggestion}")?;
        }
    }

    Ok(())
}

fn write_pairing_plain(report: &PairingReport, mut w: impl Write) -> Result<()> {
    writeln!(w, "pairing score: {:.2}", report.score)?;
    if let Some(category) = report.primary_category {
        writeln!(w, "primary category: {category}")?;
    }
    for line in &report.feedback {
        writeln!(w, "  {line}")?;
    }
    for suggestion in &report.suggestions {
        writeln!(w, "    - {suggestion}")?;
    }
    if !report.recommended_pairs.is_empty() {
        writeln!(w, "recommended pairs: {}", report.recommended_pairs.join(", "))?;
    }
    Ok(())
}

fn write_readability_plain(report: &ReadabilityReport, mut w: impl Write) -> Result<()> {
    writeln!(
        w,
        "readability score: {:.2} ({} elements)",
        report.score, report.elements_analyzed
    )?;
    for line in &report.feedback {
        writeln!(w, "  {line}")?;
    }
    for suggestion in &report.suggestions {
        writeln!(w, "    - {suggestion}")?;
    }
    Ok(())
}

fn write_hierarchy_plain(report: &HierarchyReport, mut w: impl Write) -> Result<()> {
    writeln!(
        w,
        "hierarchy score: {:.2} ({} levels)",
        report.score, report.hierarchy_levels
    )?;
    for line in &report.feedback {
        writeln!(w, "  {line}")?;
    }
    for suggestion in &report.suggestions {
        writeln!(w, "    - {suggestion}")?;
    }
    Ok(())
}

fn write_batch_columns(
    reports: &[DocumentReport],
    mut w: impl Write,
    color: bool,
) -> Result<()> {
    let mut rows: Vec<(String, String, String)> = reports
        .iter()
        .map(|report| {
            let path = report.path.display().to_string();
            let scores = format!(
                "pairing:{:.2} readability:{:.2} hierarchy:{:.2}",
                report.pairing_score, report.readability_score, report.hierarchy_score
            );
            let findings = format!(
                "{} finding{}",
                report.results.len(),
                if report.results.len() == 1 { "" } else { "s" }
            );
            (path, scores, findings)
        })
        .collect();

    let path_width = rows
        .iter()
        .map(|r| r.0.len())
        .max()
        .unwrap_or(0)
        .clamp(0, 120);

    for (path, scores, findings) in rows.drain(..) {
        let padded_path = format!("{:<path_width$}", path);
        let rendered_path = apply_color(&padded_path, color, AnsiColor::Cyan);
        let rendered_scores = apply_color(&scores, color, AnsiColor::Green);
        let rendered_findings = apply_color(&findings, color, AnsiColor::Yellow);

        writeln!(w, "{rendered_path}  {rendered_scores}  {rendered_findings}")?;
    }

    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
    Red,
}

fn severity_color(severity: Severity) -> AnsiColor {
    match severity {
        Severity::Info => AnsiColor::Cyan,
        Severity::Warning => AnsiColor::Yellow,
        Severity::Error => AnsiColor::Red,
    }
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
        AnsiColor::Red => "31",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}
