//! Crash report delivery to a Google Docs form.
//!
//! A [`GoogleFormSender`] takes a finished [`CrashReportData`], renames its
//! fields to the form's parameter keys and posts them with one blocking HTTP
//! request. Collecting the report, scheduling sends and persisting failures
//! belong to the caller.
//!
//! ```no_run
//! use google_form_sender::{CrashReportData, GoogleFormSender, ReportField};
//!
//! let sender = GoogleFormSender::new("dDN6NDdnN2I2aWU1SW5XNmNyWVljWmc6MQ");
//! let mut report = CrashReportData::new();
//! report.insert(ReportField::AppVersionCode, "42");
//! report.insert(ReportField::StackTrace, "java.lang.RuntimeException: boom");
//! if let Err(err) = sender.send(&report) {
//!     eprintln!("{err}");
//! }
//! ```

pub mod builder;
mod file_config;
pub mod google_form;
pub mod report;
pub mod sender;

#[cfg(any(test, feature = "test-util"))]
pub mod test_utils;

pub use builder::{GoogleFormSenderBuilder, SenderBuildError};
pub use file_config::INI_SECTION;
pub use google_form::{
    FormParams, FormTransport, GoogleFormSender, TransportConfig, TransportError, UreqTransport,
    form_params,
};
pub use report::{CrashReportData, ReportField, UnknownReportField};
pub use sender::{DELIVERY_FAILURE_MESSAGE, ReportSender, ReportSenderError};
