use typocrit_core::element::{FontDescriptor, FontWeight, TypographyElement};
use typocrit_core::pairing::analyze_pairing;
use typocrit_core::readability::assess_readability;
use typocrit_core::rules::RuleSet;
use typocrit_core::synthesis::{analyze_elements, AgentMode, Severity, TaskType};

fn heading() -> TypographyElement {
    TypographyElement {
        family: "Helvetica".to_string(),
        font_size: 24.0,
        font_weight: FontWeight::Bold,
        line_length: 45,
        text: Some("Main Heading".to_string()),
        ..TypographyElement::default()
    }
}

fn body() -> TypographyElement {
    TypographyElement {
        family: "Times New Roman".to_string(),
        font_size: 12.0,
        line_height: 1.4,
        character_spacing: 0.02,
        color: "#333333".to_string(),
        line_length: 65,
        ..TypographyElement::default()
    }
}

#[test]
fn sans_heading_over_serif_body_pairs_well() {
    let rules = RuleSet::builtin();
    let fonts = vec![
        FontDescriptor::new("Helvetica"),
        FontDescriptor::new("Times New Roman"),
    ];

    let report = analyze_pairing(&fonts, &rules);

    assert_eq!(report.score, 0.8);
    assert_eq!(report.primary_category.unwrap().to_string(), "sans-serif");
    assert!(report.suggestions.is_empty());
}

#[test]
fn overlong_measure_costs_exactly_one_check() {
    let rules = RuleSet::builtin();
    let element = TypographyElement {
        font_size: 12.0,
        line_height: 1.2,
        character_spacing: 0.0,
        line_length: 90,
        ..TypographyElement::default()
    };

    let report = assess_readability(&[element], &rules);

    assert_eq!(report.score, 0.75);
    assert_eq!(report.elements_analyzed, 1);
}

#[test]
fn combined_analysis_flags_only_gated_areas() {
    let rules = RuleSet::builtin();
    // Good pairing and readable body, but uniform weight and color kill
    // hierarchy variety.
    let elements = vec![
        TypographyElement {
            font_weight: FontWeight::Regular,
            ..heading()
        },
        TypographyElement {
            color: "#000000".to_string(),
            ..body()
        },
    ];

    let results = analyze_elements(&elements, AgentMode::Guide, &rules);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].task_type, TaskType::Hierarchy);
    assert_eq!(results[0].severity, Severity::Info);
    assert!(!results[0].auto_fix_available);
}

#[test]
fn empty_element_list_degrades_to_explicit_results() {
    let rules = RuleSet::builtin();
    let results = analyze_elements(&[], AgentMode::Critic, &rules);

    // Pairing is trivially fine; readability scores 0.0 and hierarchy 0.5,
    // so exactly those two surface.
    let tasks: Vec<TaskType> = results.iter().map(|r| r.task_type).collect();
    assert_eq!(tasks, vec![TaskType::Readability, TaskType::Hierarchy]);
    assert_eq!(results[0].severity, Severity::Warning);
    assert_eq!(results[0].confidence_score, 0.0);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let rules = RuleSet::builtin();
    let elements = vec![heading(), body(), heading()];

    let first = serde_json::to_string(&analyze_elements(&elements, AgentMode::Guide, &rules))
        .expect("serialize");
    let second = serde_json::to_string(&analyze_elements(&elements, AgentMode::Guide, &rules))
        .expect("serialize");

    assert_eq!(first, second);
}

#[test]
fn readability_score_grows_as_checks_pass() {
    let rules = RuleSet::builtin();
    let broken = TypographyElement {
        font_size: 6.0,
        line_height: 2.4,
        character_spacing: 0.5,
        line_length: 90,
        ..TypographyElement::default()
    };

    let mut previous = assess_readability(&[broken.clone()], &rules).score;
    assert_eq!(previous, 0.0);

    let fixes: [fn(&mut TypographyElement); 4] = [
        |e| e.font_size = 12.0,
        |e| e.line_height = 1.4,
        |e| e.character_spacing = 0.0,
        |e| e.line_length = 60,
    ];

    let mut element = broken;
    for fix in fixes {
        fix(&mut element);
        let score = assess_readability(&[element.clone()], &rules).score;
        assert!(score > previous, "each repaired check should raise the score");
        previous = score;
    }

    assert_eq!(previous, 1.0);
}

#[test]
fn mode_never_changes_scores_or_result_set() {
    let rules = RuleSet::builtin();
    let elements = vec![
        TypographyElement {
            family: "Party Brush".to_string(),
            font_size: 7.0,
            ..TypographyElement::default()
        },
        TypographyElement {
            family: "Festive Script".to_string(),
            font_size: 7.0,
            ..TypographyElement::default()
        },
    ];

    let critic = analyze_elements(&elements, AgentMode::Critic, &rules);
    let guide = analyze_elements(&elements, AgentMode::Guide, &rules);
    let helper = analyze_elements(&elements, AgentMode::Helper, &rules);

    assert_eq!(critic.len(), guide.len());
    assert_eq!(guide.len(), helper.len());
    for ((c, g), h) in critic.iter().zip(&guide).zip(&helper) {
        assert_eq!(c.task_type, g.task_type);
        assert_eq!(c.severity, g.severity);
        assert_eq!(c.confidence_score, h.confidence_score);
        assert_eq!(c.suggestions, h.suggestions);
    }
}
