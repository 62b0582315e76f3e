//! Intention records
//!
//! Field names match the JSON report.

use serde::Serialize;

use crate::shared::constants::markers;
use crate::shared::utils::naming::case_name;

/// (domain, component, layer) grouping key declared by `@describe`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    pub domain: String,
    pub component: String,
    pub layer: String,
}

impl Classification {
    pub fn new(
        domain: impl Into<String>,
        component: impl Into<String>,
        layer: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            component: component.into(),
            layer: layer.into(),
        }
    }
}

/// Marker kind; serialized as the marker's Python name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IntentionKind {
    #[serde(rename = "when")]
    Precondition,
    #[serde(rename = "case")]
    Action,
    #[serde(rename = "expect")]
    Expectation,
}

impl IntentionKind {
    pub fn from_marker_name(name: &str) -> Option<Self> {
        match name {
            markers::WHEN => Some(IntentionKind::Precondition),
            markers::CASE => Some(IntentionKind::Action),
            markers::EXPECT => Some(IntentionKind::Expectation),
            _ => None,
        }
    }
}

/// One marker block found in a test body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerRecord {
    #[serde(rename = "type")]
    pub kind: IntentionKind,
    /// Line of the description literal
    #[serde(rename = "code_line")]
    pub source_line: u32,
    pub description: String,
}

impl MarkerRecord {
    pub fn new(kind: IntentionKind, source_line: u32, description: impl Into<String>) -> Self {
        Self {
            kind,
            source_line,
            description: description.into(),
        }
    }
}

/// Class a test method is defined in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingClass {
    pub name: String,
    pub source_line: u32,
}

/// One qualifying test function
///
/// `class_name` and `class_code_line` are set together from an
/// [`EnclosingClass`], so a record is never half-classed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCaseRecord {
    file_path: String,
    class_name: Option<String>,
    class_code_line: Option<u32>,
    case_name: String,
    function_name: String,
    function_code_line: u32,
    intentions: Vec<MarkerRecord>,
}

impl TestCaseRecord {
    pub fn new(
        file_path: impl Into<String>,
        enclosing: Option<EnclosingClass>,
        function_name: impl Into<String>,
        function_line: u32,
        markers: Vec<MarkerRecord>,
        test_prefix: &str,
    ) -> Self {
        let function_name = function_name.into();
        let (class_name, class_code_line) = match enclosing {
            Some(class) => (Some(class.name), Some(class.source_line)),
            None => (None, None),
        };

        Self {
            file_path: file_path.into(),
            class_name,
            class_code_line,
            case_name: case_name(&function_name, test_prefix),
            function_name,
            function_code_line: function_line,
            intentions: markers,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn class_line(&self) -> Option<u32> {
        self.class_code_line
    }

    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn function_line(&self) -> u32 {
        self.function_code_line
    }

    pub fn markers(&self) -> &[MarkerRecord] {
        &self.intentions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intention_kind_names() {
        assert_eq!(
            IntentionKind::from_marker_name("when"),
            Some(IntentionKind::Precondition)
        );
        assert_eq!(
            IntentionKind::from_marker_name("case"),
            Some(IntentionKind::Action)
        );
        assert_eq!(
            IntentionKind::from_marker_name("expect"),
            Some(IntentionKind::Expectation)
        );
        assert_eq!(IntentionKind::from_marker_name("given"), None);
        assert_eq!(
            serde_json::to_value(IntentionKind::Expectation).unwrap(),
            json!("expect")
        );
    }

    #[test]
    fn test_marker_serializes_plain_tag() {
        let marker = MarkerRecord::new(IntentionKind::Precondition, 13, "Balance is low");
        assert_eq!(
            serde_json::to_value(&marker).unwrap(),
            json!({"type": "when", "code_line": 13, "description": "Balance is low"})
        );
    }

    #[test]
    fn test_record_serialization_with_class() {
        let record = TestCaseRecord::new(
            "fixtures/test_file.py",
            Some(EnclosingClass {
                name: "TestAccountsService".to_string(),
                source_line: 10,
            }),
            "test_transfer_money",
            12,
            vec![MarkerRecord::new(IntentionKind::Action, 13, "Transfer")],
            "test_",
        );

        assert_eq!(record.class_name(), Some("TestAccountsService"));
        assert_eq!(record.case_name(), "Transfer money");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "file_path": "fixtures/test_file.py",
                "class_name": "TestAccountsService",
                "class_code_line": 10,
                "case_name": "Transfer money",
                "function_name": "test_transfer_money",
                "function_code_line": 12,
                "intentions": [
                    {"type": "case", "code_line": 13, "description": "Transfer"}
                ]
            })
        );
    }

    #[test]
    fn test_record_without_class_serializes_nulls() {
        let record = TestCaseRecord::new("test_a.py", None, "test_free", 1, vec![], "test_");
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["class_name"].is_null());
        assert!(value["class_code_line"].is_null());
        assert_eq!(record.class_line(), None);
    }
}
