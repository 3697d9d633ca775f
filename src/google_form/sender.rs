//! Sender posting crash reports to a Google Docs form.

use log::debug;

use crate::report::CrashReportData;
use crate::sender::{ReportSender, ReportSenderError};

use super::config::{FORM_RESPONSE_ENDPOINT, form_uri};
use super::params::{FormParams, form_params};
use super::transport::{FormTransport, UreqTransport};

/// Sends report data to a Google Docs form identified by its key.
///
/// The key is the `formkey` value of the form's view URL, e.g.
/// `https://spreadsheets.google.com/viewform?formkey=dDN6NDdnN2I2aWU1SW5XNmNyWVljWmc6MQ`.
/// The destination address is fixed at construction; every call to
/// [`send`](Self::send) rebuilds its parameters from scratch, so one sender
/// can be shared freely between threads.
pub struct GoogleFormSender<T = UreqTransport> {
    form_uri: String,
    transport: T,
}

impl GoogleFormSender {
    /// Create a sender for the form identified by `form_key`.
    ///
    /// No network activity happens until [`send`](Self::send).
    pub fn new(form_key: &str) -> Self {
        Self::with_transport(form_key, UreqTransport::default())
    }
}

impl<T: FormTransport> GoogleFormSender<T> {
    /// Create a sender for `form_key` that posts through `transport`.
    pub fn with_transport(form_key: &str, transport: T) -> Self {
        Self::with_endpoint(FORM_RESPONSE_ENDPOINT, form_key, transport)
    }

    pub(crate) fn with_endpoint(endpoint: &str, form_key: &str, transport: T) -> Self {
        Self {
            form_uri: form_uri(endpoint, form_key),
            transport,
        }
    }

    /// Destination address the form is posted to.
    pub fn form_uri(&self) -> &str {
        &self.form_uri
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the parameters [`send`](Self::send) would post for `report`.
    pub fn form_params(&self, report: &CrashReportData) -> FormParams {
        form_params(report)
    }

    /// Post `report` to the form.
    ///
    /// # Errors
    ///
    /// Returns [`ReportSenderError`] wrapping the transport failure if the
    /// request cannot be completed or the endpoint does not answer with 2xx.
    pub fn send(&self, report: &CrashReportData) -> Result<(), ReportSenderError> {
        <Self as ReportSender>::send(self, report)
    }
}

impl<T: FormTransport> ReportSender for GoogleFormSender<T> {
    fn send(&self, report: &CrashReportData) -> Result<(), ReportSenderError> {
        let body = form_params(report).encode();
        debug!("Connect to {}", self.form_uri);
        self.transport
            .post_form(&self.form_uri, &body)
            .map_err(ReportSenderError::delivery)
    }
}

impl<T> std::fmt::Debug for GoogleFormSender<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleFormSender")
            .field("form_uri", &self.form_uri)
            .finish_non_exhaustive()
    }
}
