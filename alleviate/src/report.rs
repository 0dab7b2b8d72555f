//! Report data model
//!
//! A [`Report`] is built once per failure and is read-only afterwards. The
//! renderers only ever see it through the accessors below.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a symptom: either free text or a number such as an errno
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymptomValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for SymptomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymptomValue::Integer(n) => write!(f, "{}", n),
            SymptomValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SymptomValue {
    fn from(value: i64) -> Self {
        SymptomValue::Integer(value)
    }
}

impl From<i32> for SymptomValue {
    fn from(value: i32) -> Self {
        SymptomValue::Integer(value as i64)
    }
}

impl From<u32> for SymptomValue {
    fn from(value: u32) -> Self {
        SymptomValue::Integer(value as i64)
    }
}

impl From<String> for SymptomValue {
    fn from(value: String) -> Self {
        SymptomValue::Text(value)
    }
}

impl From<&str> for SymptomValue {
    fn from(value: &str) -> Self {
        SymptomValue::Text(value.to_string())
    }
}

/// A named observation about the failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub name: String,
    pub value: SymptomValue,
}

impl Symptom {
    pub fn new(name: impl Into<String>, value: impl Into<SymptomValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A suggested remediation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Heading grouping related suggestions ("Check out files with similar name")
    pub description: String,
    /// The suggestion itself
    pub suggestion: String,
}

impl Solution {
    pub fn new(description: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Structured diagnostic for a single failure
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    title: String,
    description: String,
    exception: String,
    symptoms: Vec<Symptom>,
    solutions: Vec<Solution>,
}

impl Report {
    pub fn builder(exception: impl Into<String>) -> ReportBuilder {
        ReportBuilder::new(exception)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Name of the classified failure kind
    pub fn exception(&self) -> &str {
        &self.exception
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Look up a symptom value by name
    pub fn symptom(&self, name: &str) -> Option<&SymptomValue> {
        self.symptoms.iter().find(|s| s.name == name).map(|s| &s.value)
    }
}

/// Accumulates the sections of a [`Report`]
#[derive(Debug)]
pub struct ReportBuilder {
    title: String,
    description: String,
    exception: String,
    symptoms: Vec<Symptom>,
    solutions: Vec<Solution>,
}

impl ReportBuilder {
    pub fn new(exception: impl Into<String>) -> Self {
        Self {
            title: "Program error".to_string(),
            description: String::new(),
            exception: exception.into(),
            symptoms: Vec::new(),
            solutions: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn symptom(mut self, name: impl Into<String>, value: impl Into<SymptomValue>) -> Self {
        self.symptoms.push(Symptom::new(name, value));
        self
    }

    pub fn solution(mut self, solution: Solution) -> Self {
        self.solutions.push(solution);
        self
    }

    pub fn solutions(mut self, solutions: impl IntoIterator<Item = Solution>) -> Self {
        self.solutions.extend(solutions);
        self
    }

    pub fn build(self) -> Report {
        Report {
            title: self.title,
            description: self.description,
            exception: self.exception,
            symptoms: self.symptoms,
            solutions: self.solutions,
        }
    }
}
