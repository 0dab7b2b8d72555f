//! Human-readable report layout
//!
//! ```text
//! Program error
//! -------------
//! File /x/text.py could not be found
//!
//! Errno:  2 (ENOENT)
//! Action: open
//!
//! Symptoms
//! --------
//!    File does not exist: /x/text.py
//!    Errno:               2
//!
//! Solutions
//! ---------
//!    Check out files with similar name:
//!
//!       /x/test.py similarity: 85%
//! ```

use super::Renderer;
use crate::report::{Report, Solution, Symptom};
use colored::Colorize;

const INDENT: &str = "   ";

/// Renderer for the full report with underlined section headers
pub struct DetailedRenderer {
    /// Whether to style headers and values with ANSI colors
    pub use_color: bool,
}

impl DetailedRenderer {
    /// Create a renderer without colors
    pub fn new() -> Self {
        Self { use_color: false }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    fn format_header(&self, title: &str) -> String {
        let underline = "-".repeat(title.chars().count());
        if self.use_color {
            format!("{}\n{}\n", title.bold().cyan(), underline.cyan())
        } else {
            format!("{}\n{}\n", title, underline)
        }
    }

    fn format_symptoms(&self, symptoms: &[Symptom]) -> String {
        let column = symptoms.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);

        let mut output = String::new();
        for symptom in symptoms {
            let padding = " ".repeat(1 + column - symptom.name.chars().count());
            let value = symptom.value.to_string();
            let value = if self.use_color {
                value.yellow().to_string()
            } else {
                value
            };
            output.push_str(&format!("{}{}:{}{}\n", INDENT, symptom.name, padding, value));
        }
        output
    }

    fn format_solutions(&self, solutions: &[Solution]) -> String {
        let mut output = String::new();
        let mut current: Option<&str> = None;

        for solution in solutions {
            if current != Some(solution.description.as_str()) {
                if current.is_some() {
                    output.push('\n');
                }
                output.push_str(&format!("{}{}:\n\n", INDENT, solution.description));
                current = Some(solution.description.as_str());
            }
            let suggestion = if self.use_color {
                solution.suggestion.green().to_string()
            } else {
                solution.suggestion.clone()
            };
            output.push_str(&format!("{}{}{}\n", INDENT, INDENT, suggestion));
        }
        output
    }
}

impl Default for DetailedRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for DetailedRenderer {
    fn render(&self, report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(report.title()));
        output.push_str(report.description().trim_end());
        output.push_str("\n\n");

        output.push_str(&self.format_header("Symptoms"));
        output.push_str(&self.format_symptoms(report.symptoms()));
        output.push('\n');

        output.push_str(&self.format_header("Solutions"));
        output.push_str(&self.format_solutions(report.solutions()));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report::builder("FileNotFoundError")
            .description("File /x/text.py could not be found\n\nErrno:  2 (ENOENT)\nAction: open")
            .symptom("File does not exist", "/x/text.py")
            .symptom("Errno", 2)
            .solution(Solution::new("Check out files with similar name", "/x/test.py similarity: 85%"))
            .solution(Solution::new("Check out files with similar name", "/x/tests.py similarity: 80%"))
            .build()
    }

    #[test]
    fn test_detailed_layout() {
        let output = DetailedRenderer::new().render(&sample_report());

        let expected = "Program error\n\
                        -------------\n\
                        File /x/text.py could not be found\n\
                        \n\
                        Errno:  2 (ENOENT)\n\
                        Action: open\n\
                        \n\
                        Symptoms\n\
                        --------\n   \
                        File does not exist: /x/text.py\n   \
                        Errno:               2\n\
                        \n\
                        Solutions\n\
                        ---------\n   \
                        Check out files with similar name:\n\
                        \n      \
                        /x/test.py similarity: 85%\n      \
                        /x/tests.py similarity: 80%\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_sections_keep_headers() {
        let report = Report::builder("Interrupted")
            .description("Operation read failed: interrupted")
            .build();
        let output = DetailedRenderer::new().render(&report);

        assert!(output.contains("Symptoms\n--------\n"));
        assert!(output.ends_with("Solutions\n---------\n"));
    }

    #[test]
    fn test_color_adds_escape_codes() {
        colored::control::set_override(true);
        let output = DetailedRenderer::new().with_color(true).render(&sample_report());
        colored::control::unset_override();

        assert!(output.contains("\u{1b}["));
        assert!(output.contains("Symptoms"));
    }
}
