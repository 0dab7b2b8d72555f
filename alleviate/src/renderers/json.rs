//! JSON renderer for structured output

use super::Renderer;
use crate::error::Result;
use crate::report::{Report, Solution, Symptom};
use serde::{Deserialize, Serialize};

/// Wire shape of a rendered report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub symptoms: Vec<Symptom>,
    pub exception: String,
    pub description: String,
    pub solutions: Vec<String>,
}

impl From<&Report> for JsonReport {
    fn from(report: &Report) -> Self {
        Self {
            symptoms: report.symptoms().to_vec(),
            exception: report.exception().to_string(),
            description: report.description().trim().to_string(),
            solutions: report
                .solutions()
                .iter()
                .map(|s| s.suggestion.trim().to_string())
                .collect(),
        }
    }
}

impl JsonReport {
    /// Parse a document produced by [`JsonRenderer`]
    pub fn parse(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Rebuild a report from its wire shape. Solution headings are not part
    /// of the JSON document, so they come back empty.
    pub fn into_report(self) -> Report {
        let mut builder = Report::builder(self.exception).description(self.description);
        for symptom in self.symptoms {
            builder = builder.symptom(symptom.name, symptom.value);
        }
        builder
            .solutions(self.solutions.into_iter().map(|s| Solution::new("", s)))
            .build()
    }
}

/// JSON renderer that produces structured JSON output
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Serialize the report, surfacing encoder errors
    pub fn try_render(&self, report: &Report) -> Result<String> {
        let document = JsonReport::from(report);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(rendered)
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report) -> String {
        self.try_render(report).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn create_test_report() -> Report {
        Report::builder("FileNotFoundError")
            .description("File /x/text.py could not be found\n\nErrno:  2 (ENOENT)\nAction: open\n")
            .symptom("File does not exist", "/x/text.py")
            .symptom("Errno", 2)
            .solution(Solution::new("Check out files with similar name", "/x/test.py similarity: 85%"))
            .build()
    }

    #[test]
    fn test_json_renderer() {
        let output = JsonRenderer::new().render(&create_test_report());
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["exception"], "FileNotFoundError");
        assert_eq!(
            value["description"],
            "File /x/text.py could not be found\n\nErrno:  2 (ENOENT)\nAction: open"
        );
        assert_eq!(value["symptoms"][0]["name"], "File does not exist");
        assert_eq!(value["symptoms"][0]["value"], "/x/text.py");
        assert_eq!(value["symptoms"][1]["value"], 2);
        assert_eq!(value["solutions"][0], "/x/test.py similarity: 85%");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_compact_is_single_line() {
        let output = JsonRenderer::compact().render(&create_test_report());
        assert!(!output.contains('\n'));
        assert!(output.starts_with('{'));
    }

    #[test]
    fn test_parse_round_trip() {
        let output = JsonRenderer::new().render(&create_test_report());
        let parsed = JsonReport::parse(&output).unwrap();
        let reserialized: Value = serde_json::to_value(&parsed).unwrap();
        let original: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(reserialized, original);

        let report = parsed.into_report();
        assert_eq!(report.exception(), "FileNotFoundError");
        assert_eq!(report.solutions()[0].suggestion, "/x/test.py similarity: 85%");
    }
}
