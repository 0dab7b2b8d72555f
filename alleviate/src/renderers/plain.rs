use super::Renderer;
use crate::report::Report;

/// Title, description and one suggestion per line. Symptoms are left out.
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, report: &Report) -> String {
        let mut output = String::new();
        output.push_str(report.title());
        output.push('\n');
        output.push_str(report.description().trim_end());
        output.push('\n');

        if !report.solutions().is_empty() {
            output.push('\n');
            for solution in report.solutions() {
                output.push_str(&solution.suggestion);
                output.push('\n');
            }
        }

        output
    }
}
