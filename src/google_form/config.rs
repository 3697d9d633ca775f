//! Endpoint and transport settings for the Google Form sender.
//!
//! [`GoogleFormSenderBuilder`](crate::GoogleFormSenderBuilder) constructs
//! these values before handing them to
//! [`GoogleFormSender`](super::GoogleFormSender).

use std::time::Duration;

/// Base address of the public Google Docs form response endpoint.
pub const FORM_RESPONSE_ENDPOINT: &str = "https://spreadsheets.google.com/formResponse";
/// Default connection timeout applied when establishing HTTP connections.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default timeout for the whole form post.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the destination address for `form_key` under `endpoint`.
///
/// The key is substituted verbatim; no escaping is applied.
pub fn form_uri(endpoint: &str, form_key: &str) -> String {
    format!("{endpoint}?formkey={form_key}&ifq")
}

/// Settings for the blocking HTTP agent used to post forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportConfig {
    /// Timeout for establishing connections.
    pub connect_timeout: Duration,
    /// Timeout for the whole request, including reading the response.
    pub request_timeout: Duration,
    /// Use the platform TLS stack instead of the bundled rustls one.
    pub native_tls: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            native_tls: false,
        }
    }
}
