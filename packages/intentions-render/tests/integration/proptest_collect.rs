//! Property-based tests for collection robustness
//!
//! Generated test modules must either produce a report or a typed error,
//! never a panic, and the report must follow the marker/classification
//! rules for every generated function.

use intentions_render::features::parsing::TreeSitterParser;
use intentions_render::shared::utils::naming::case_name;
use intentions_render::{collect_source, RenderConfig, Report};
use proptest::prelude::*;

// Strategy for generating lowercase identifier words
fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}".prop_filter("not a keyword", |s| {
        !matches!(
            s.as_str(),
            "def" | "class" | "if" | "else" | "for" | "while" | "return" | "import" | "from"
                | "with" | "as" | "in" | "is" | "or" | "and" | "not" | "pass" | "try" | "del"
                | "elif" | "case" | "match" | "async" | "await" | "yield" | "raise" | "none"
        )
    })
}

fn marker() -> impl Strategy<Value = (&'static str, String)> {
    (
        prop_oneof![Just("when"), Just("case"), Just("expect"), Just("open")],
        "[A-Za-z ]{0,20}",
    )
}

#[derive(Debug, Clone)]
struct GeneratedTest {
    name: String,
    decorated: bool,
    markers: Vec<(&'static str, String)>,
}

fn generated_test() -> impl Strategy<Value = GeneratedTest> {
    (
        prop::collection::vec(word(), 1..4),
        any::<bool>(),
        prop::collection::vec(marker(), 0..5),
    )
        .prop_map(|(words, decorated, markers)| GeneratedTest {
            name: format!("test_{}", words.join("_")),
            decorated,
            markers,
        })
}

fn render_module(tests: &[GeneratedTest]) -> String {
    let mut source = String::new();
    for (i, test) in tests.iter().enumerate() {
        if test.decorated {
            source.push_str("@describe(domain='d', component='c', layer='l')\n");
        }
        source.push_str(&format!("def {}_{}():\n", test.name, i));
        source.push_str("    value = 1\n");
        for (name, description) in &test.markers {
            source.push_str(&format!("    with {}('{}'):\n        pass\n", name, description));
        }
        source.push('\n');
    }
    source
}

fn collect(source: &str) -> Report {
    let mut report = Report::new();
    collect_source(
        &mut report,
        &TreeSitterParser::python(),
        source,
        "test_generated.py",
        &RenderConfig::default(),
    )
    .unwrap();
    report
}

proptest! {
    #[test]
    fn prop_case_name_has_no_underscores(words in prop::collection::vec(word(), 1..6)) {
        let name = case_name(&format!("test_{}", words.join("_")), "test_");
        prop_assert!(!name.contains('_'));
        prop_assert_eq!(name.to_lowercase(), words.join(" "));
        prop_assert!(name.chars().next().map_or(false, |c| !c.is_lowercase()));
    }

    #[test]
    fn prop_only_decorated_tests_with_markers_are_reported(
        tests in prop::collection::vec(generated_test(), 0..6)
    ) {
        let report = collect(&render_module(&tests));

        let expected: Vec<_> = tests
            .iter()
            .enumerate()
            .filter(|(_, t)| t.decorated && t.markers.iter().any(|(name, _)| *name != "open"))
            .map(|(i, t)| format!("{}_{}", t.name, i))
            .collect();
        let reported: Vec<_> = report
            .records()
            .map(|(_, record)| record.function_name().to_string())
            .collect();
        prop_assert_eq!(reported, expected);

        for (_, record) in report.records() {
            let lines: Vec<_> = record.markers().iter().map(|m| m.source_line).collect();
            let mut sorted = lines.clone();
            sorted.sort_unstable();
            prop_assert_eq!(lines, sorted);
        }
    }

    #[test]
    fn prop_arbitrary_text_never_panics(source in "(?s).{0,200}") {
        let mut report = Report::new();
        let _ = collect_source(
            &mut report,
            &TreeSitterParser::python(),
            &source,
            "test_random.py",
            &RenderConfig::default(),
        );
    }
}
