//! Builder for [`GoogleFormSender`](crate::GoogleFormSender).
//!
//! Exposes the form key, an endpoint override for self-hosted mirrors,
//! transport timeouts and the TLS backend. Values are validated when
//! [`GoogleFormSenderBuilder::build`] is called.

use std::{io, time::Duration};

use thiserror::Error;

use crate::google_form::{
    FORM_RESPONSE_ENDPOINT, FormTransport, GoogleFormSender, TransportConfig, UreqTransport,
};

/// Errors that may occur while building a sender.
#[derive(Debug, Error)]
pub enum SenderBuildError {
    /// Invalid user supplied configuration.
    #[error("invalid sender configuration: {0}")]
    InvalidConfig(String),
    /// The platform TLS connector could not be created.
    #[error("failed to initialise TLS connector: {0}")]
    Tls(#[from] native_tls::Error),
    /// Underlying I/O error whilst reading configuration.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A configuration file could not be decoded or parsed.
    #[error("invalid configuration file: {0}")]
    Ini(String),
}

macro_rules! ensure_positive {
    ($value:expr, $field:expr) => {{
        if $value == 0 {
            Err(SenderBuildError::InvalidConfig(format!(
                "{} must be greater than zero",
                $field
            )))
        } else {
            Ok($value)
        }
    }};
}

macro_rules! option_setter {
    ($(#[$meta:meta])* $fn_name:ident, $field:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $fn_name(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
}

/// Builder for constructing [`GoogleFormSender`] instances.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoogleFormSenderBuilder {
    form_key: Option<String>,
    endpoint: Option<String>,
    connect_timeout_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
    native_tls: bool,
}

impl GoogleFormSenderBuilder {
    /// Create a new builder with no form key configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key of the target form (required).
    pub fn with_form_key(mut self, form_key: impl Into<String>) -> Self {
        self.form_key = Some(form_key.into());
        self
    }

    /// Post to `endpoint` instead of the public Google Docs form endpoint.
    ///
    /// The form key and `ifq` marker are still appended as query parameters.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    option_setter!(
        #[doc = "Set the connect timeout in milliseconds."]
        with_connect_timeout_ms,
        connect_timeout_ms,
        u64
    );
    option_setter!(
        #[doc = "Set the request timeout in milliseconds."]
        with_request_timeout_ms,
        request_timeout_ms,
        u64
    );

    /// Use the platform TLS stack (via `native-tls`) for HTTPS.
    pub fn with_native_tls(mut self, enabled: bool) -> Self {
        self.native_tls = enabled;
        self
    }

    fn validate(&self) -> Result<(), SenderBuildError> {
        self.validate_form_key()?;
        self.validate_endpoint()?;
        self.validate_timeouts()?;
        Ok(())
    }

    fn validate_form_key(&self) -> Result<(), SenderBuildError> {
        match &self.form_key {
            None => Err(SenderBuildError::InvalidConfig(
                "Google Form sender requires a form key".into(),
            )),
            Some(key) if key.trim().is_empty() => Err(SenderBuildError::InvalidConfig(
                "form key must not be empty".into(),
            )),
            _ => Ok(()),
        }
    }

    fn validate_endpoint(&self) -> Result<(), SenderBuildError> {
        match &self.endpoint {
            Some(endpoint) if endpoint.trim().is_empty() => Err(
                SenderBuildError::InvalidConfig("endpoint must not be empty".into()),
            ),
            _ => Ok(()),
        }
    }

    fn validate_timeouts(&self) -> Result<(), SenderBuildError> {
        if let Some(timeout) = self.connect_timeout_ms {
            ensure_positive!(timeout, "connect_timeout_ms")?;
        }
        if let Some(timeout) = self.request_timeout_ms {
            ensure_positive!(timeout, "request_timeout_ms")?;
        }
        Ok(())
    }

    /// Transport settings derived from this builder, defaults filled in.
    pub fn transport_config(&self) -> TransportConfig {
        let defaults = TransportConfig::default();
        TransportConfig {
            connect_timeout: self
                .connect_timeout_ms
                .map_or(defaults.connect_timeout, Duration::from_millis),
            request_timeout: self
                .request_timeout_ms
                .map_or(defaults.request_timeout, Duration::from_millis),
            native_tls: self.native_tls,
        }
    }

    /// Build a sender posting through a `ureq` agent.
    ///
    /// # Errors
    ///
    /// Returns [`SenderBuildError::InvalidConfig`] for a missing or blank form
    /// key, a blank endpoint or a zero timeout, and
    /// [`SenderBuildError::Tls`] if native TLS was requested but unavailable.
    pub fn build(&self) -> Result<GoogleFormSender, SenderBuildError> {
        self.validate()?;
        let transport = UreqTransport::with_config(&self.transport_config())?;
        Ok(self.assemble(transport))
    }

    /// Build a sender posting through `transport`.
    ///
    /// Timeout and TLS settings are ignored; `transport` owns those concerns.
    pub fn build_with_transport<T: FormTransport>(
        &self,
        transport: T,
    ) -> Result<GoogleFormSender<T>, SenderBuildError> {
        self.validate()?;
        Ok(self.assemble(transport))
    }

    fn assemble<T: FormTransport>(&self, transport: T) -> GoogleFormSender<T> {
        let endpoint = self.endpoint.as_deref().unwrap_or(FORM_RESPONSE_ENDPOINT);
        let form_key = self.form_key.as_deref().unwrap_or_default();
        GoogleFormSender::with_endpoint(endpoint, form_key, transport)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test_utils::RecordingTransport;

    #[rstest]
    fn requires_form_key() {
        let err = GoogleFormSenderBuilder::new()
            .build_with_transport(RecordingTransport::new())
            .expect_err("missing key must fail");
        assert!(matches!(err, SenderBuildError::InvalidConfig(_)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_form_key(#[case] key: &str) {
        let err = GoogleFormSenderBuilder::new()
            .with_form_key(key)
            .build_with_transport(RecordingTransport::new())
            .expect_err("blank key must fail");
        assert_eq!(
            err.to_string(),
            "invalid sender configuration: form key must not be empty"
        );
    }

    #[rstest]
    fn rejects_blank_endpoint() {
        let err = GoogleFormSenderBuilder::new()
            .with_form_key("abc")
            .with_endpoint(" ")
            .build_with_transport(RecordingTransport::new())
            .expect_err("blank endpoint must fail");
        assert!(matches!(err, SenderBuildError::InvalidConfig(_)));
    }

    #[rstest]
    #[case(GoogleFormSenderBuilder::new().with_connect_timeout_ms(0), "connect_timeout_ms")]
    #[case(GoogleFormSenderBuilder::new().with_request_timeout_ms(0), "request_timeout_ms")]
    fn rejects_zero_timeouts(#[case] builder: GoogleFormSenderBuilder, #[case] field: &str) {
        let err = builder
            .with_form_key("abc")
            .build()
            .expect_err("zero timeout must fail");
        assert_eq!(
            err.to_string(),
            format!("invalid sender configuration: {field} must be greater than zero")
        );
    }

    #[rstest]
    fn defaults_to_public_endpoint() {
        let sender = GoogleFormSenderBuilder::new()
            .with_form_key("abc")
            .build()
            .expect("build");
        assert_eq!(
            sender.form_uri(),
            "https://spreadsheets.google.com/formResponse?formkey=abc&ifq"
        );
    }

    #[rstest]
    fn endpoint_override_keeps_query() {
        let sender = GoogleFormSenderBuilder::new()
            .with_form_key("abc")
            .with_endpoint("http://127.0.0.1:9/form")
            .build_with_transport(RecordingTransport::new())
            .expect("build");
        assert_eq!(sender.form_uri(), "http://127.0.0.1:9/form?formkey=abc&ifq");
    }

    #[rstest]
    fn transport_config_fills_defaults() {
        let builder = GoogleFormSenderBuilder::new().with_connect_timeout_ms(250);
        let config = builder.transport_config();
        assert_eq!(config.connect_timeout, Duration::from_millis(250));
        assert_eq!(config.request_timeout, TransportConfig::default().request_timeout);
        assert!(!config.native_tls);
    }

    #[rstest]
    fn request_timeout_bounds_the_whole_post() {
        let config = GoogleFormSenderBuilder::new()
            .with_request_timeout_ms(1_500)
            .transport_config();
        assert_eq!(config.request_timeout, Duration::from_millis(1_500));
        assert_eq!(config.connect_timeout, TransportConfig::default().connect_timeout);
    }
}
