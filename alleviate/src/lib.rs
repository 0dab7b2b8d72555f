//! Alleviate - readable diagnostics for failed file operations
//!
//! A risky operation is wrapped with [`attempt`], which turns its io error
//! into a classified [`Failure`]. [`alleviate`] builds a [`Report`] from the
//! failure, suggesting similarly named files when the target is missing, and
//! a [`Renderer`] turns the report into plain text, a detailed text block or
//! JSON.

pub mod alleviation;
pub mod error;
pub mod failure;
pub mod renderers;
pub mod report;
pub mod settings;
pub mod similarity;
pub mod suggest;

pub use alleviation::alleviate;
pub use error::{AlleviateError, Result, ResultExt};
pub use failure::{attempt, errno_name, Failure};
pub use renderers::{DetailedRenderer, JsonRenderer, JsonReport, OutputFormat, PlainRenderer, Renderer};
pub use report::{Report, ReportBuilder, Solution, Symptom, SymptomValue};
pub use settings::Settings;
pub use suggest::{similar_files, Suggestion};

/// Build the report for `failure` and render it in `format`.
pub fn explain(failure: &Failure, settings: &Settings, format: OutputFormat, color: bool) -> Result<String> {
    let report = alleviate(failure, settings)?;
    Ok(format.renderer(color).render(&report))
}
