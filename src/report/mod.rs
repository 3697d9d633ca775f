//! Crash report model consumed by senders.
//!
//! A report is a flat mapping from the closed [`ReportField`] set to string
//! values. Gathering those values is the job of the surrounding collector.

mod data;
mod field;

pub use data::{CrashReportData, Iter};
pub use field::{ReportField, UnknownReportField};
