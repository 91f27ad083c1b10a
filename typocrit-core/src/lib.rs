/// typocrit-core: The patient studio critic for typography
///
/// Like a seasoned art director leaning over your shoulder, this library
/// looks at a set of text elements and tells you, calmly and consistently,
/// how the type is doing. It is the quiet heart of typocrit: every judgment
/// the surrounding tooling reports comes from the deterministic scorers in
/// this crate.
///
/// ## Three Questions It Answers
///
/// **Pairing**: do these fonts belong together?
/// - Classifies each family into a broad category (serif, sans-serif,
///   script, monospace) by keyword
/// - Judges every secondary font against the primary's compatibility entry
/// - Suggests replacements when a pairing lands in avoid territory
///
/// **Readability**: will anyone enjoy reading this?
/// - Checks size, line height, character spacing and line length against
///   curated threshold ranges
/// - Scores each element on four quarter-weight checks and averages
/// - Keeps one audit line per failing check, deduplicating only suggestions
///
/// **Hierarchy**: does the page guide the eye?
/// - Sorts elements by size and inspects consecutive ratios against a
///   canonical type scale and an acceptable band
/// - Rewards weight and color variety
/// - Refuses to guess with fewer than two elements
///
/// The synthesizer folds the three scores into a severity-tagged result
/// list whose wording follows an agent mode (critic, guide, helper) without
/// ever bending the scores themselves.
///
/// ## A Sample Conversation
///
/// ```rust,no_run
/// use typocrit_core::element::TypographyElement;
/// use typocrit_core::rules::RuleSet;
/// use typocrit_core::synthesis::{analyze_elements, AgentMode};
///
/// // Rule tables are built once and passed by reference everywhere.
/// let rules = RuleSet::builtin();
///
/// let elements = vec![
///     TypographyElement {
///         family: "Helvetica".into(),
///         font_size: 24.0,
///         ..Default::default()
///     },
///     TypographyElement {
///         family: "Times New Roman".into(),
///         font_size: 12.0,
///         ..Default::default()
///     },
/// ];
///
/// for finding in analyze_elements(&elements, AgentMode::Guide, &rules) {
///     println!("{:?}: {}", finding.severity, finding.message);
/// }
/// ```
///
/// ## House Rules
///
/// - Scorers are pure functions of their input and the rule tables; calling
///   one twice with the same input yields byte-identical output
/// - All scores live in [0.0, 1.0]; empty input degrades to explicit
///   neutral results, never a panic or a division error
/// - Nothing in this crate mutates a document, measures rendered text, or
///   talks to the network; it scores, and only scores
/// - Rule tables never change under a running call; a deployment that
///   wants different tables loads a fresh [`rules::RuleSet`] and swaps it
///   between calls
///
/// ## The Cast of Characters
///
/// - [`element::TypographyElement`]: one styled run of text, as exported
/// - [`rules::RuleSet`]: the immutable tables every scorer consults
/// - [`synthesis::AnalysisResult`]: a severity-tagged, mode-rendered finding
/// - [`batch::DocumentReport`]: a whole document's scores and findings
pub mod batch;
pub mod discovery;
pub mod element;
pub mod hierarchy;
pub mod output;
pub mod pairing;
pub mod readability;
pub mod rules;
pub mod synthesis;
