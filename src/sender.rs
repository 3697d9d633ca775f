//! Report sender interface shared by every delivery mechanism.

use thiserror::Error;

use crate::google_form::TransportError;
use crate::report::CrashReportData;

/// Message carried by every Google Form delivery failure.
pub const DELIVERY_FAILURE_MESSAGE: &str = "Error while sending report to Google Form.";

/// Raised when a report could not be delivered.
///
/// There is one failure kind: connection errors, bad addresses and non-2xx
/// responses all surface here. The underlying cause is available through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ReportSenderError {
    message: &'static str,
    #[source]
    source: TransportError,
}

impl ReportSenderError {
    /// Wrap a transport failure as a Google Form delivery failure.
    pub fn delivery(source: TransportError) -> Self {
        Self {
            message: DELIVERY_FAILURE_MESSAGE,
            source,
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// The transport failure that caused this error.
    pub fn transport_error(&self) -> &TransportError {
        &self.source
    }

    pub fn into_transport_error(self) -> TransportError {
        self.source
    }
}

/// Delivers a finished crash report.
///
/// `ReportSender` is `Send + Sync` so the collecting pipeline can share one
/// sender between threads. Each call makes exactly one delivery attempt and
/// blocks until it completes; the caller decides whether to retry, persist or
/// discard a report that failed.
pub trait ReportSender: Send + Sync {
    /// Deliver `report`.
    fn send(&self, report: &CrashReportData) -> Result<(), ReportSenderError>;
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::*;

    #[test]
    fn displays_fixed_message_and_exposes_cause() {
        let err = ReportSenderError::delivery(TransportError::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "refused",
        )));
        assert_eq!(err.to_string(), "Error while sending report to Google Form.");
        assert_eq!(err.message(), DELIVERY_FAILURE_MESSAGE);
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "refused");
        assert!(matches!(err.into_transport_error(), TransportError::Io(_)));
    }
}
