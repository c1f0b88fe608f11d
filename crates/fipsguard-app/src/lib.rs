//! Use case orchestration for fipsguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and host layers. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod decide;
mod explain;
mod render;
mod report;
mod runtime_info;

pub use check::{CheckInput, CheckOutput, run_check};
pub use decide::{apply_decision, decide};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, write_diagnostics};
pub use report::{
    compute_verdict, exit_code, findings_total, runtime_error_report, serialize_report,
};
pub use runtime_info::{RuntimeInfo, parse_runtime_info};
