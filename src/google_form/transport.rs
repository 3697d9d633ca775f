//! Blocking HTTP transport used to post form bodies.
//!
//! [`UreqTransport`] keeps a `ureq::Agent` so repeated sends reuse pooled
//! connections. Timeouts are enforced here; the sender imposes none.

use std::{io, sync::Arc};

use native_tls::TlsConnector;
use thiserror::Error;
use ureq::{Agent, AgentBuilder};

use super::config::TransportConfig;

/// Content type of every form submission.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Failure reported by a [`FormTransport`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// The endpoint answered with a non-2xx status.
    #[error("form endpoint responded with status {status}")]
    Status { status: u16 },
    /// The request could not be completed (bad URL, DNS, connect, I/O).
    #[error(transparent)]
    Transport(Box<ureq::Transport>),
    /// I/O failure surfaced by a custom transport.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, _) => Self::Status { status },
            ureq::Error::Transport(transport) => Self::Transport(Box::new(transport)),
        }
    }
}

/// Performs a single blocking POST of an encoded form body.
///
/// Implementations must not retry; one call is one attempt.
pub trait FormTransport: Send + Sync {
    /// POST `body` to `url` as `application/x-www-form-urlencoded`.
    fn post_form(&self, url: &str, body: &str) -> Result<(), TransportError>;
}

/// [`FormTransport`] backed by a pooled `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    /// Build a transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform TLS connector cannot be initialised
    /// when `config.native_tls` is set.
    pub fn with_config(config: &TransportConfig) -> Result<Self, native_tls::Error> {
        let mut builder = agent_builder(config);
        if config.native_tls {
            builder = builder.tls_connector(Arc::new(TlsConnector::new()?));
        }
        Ok(Self {
            agent: builder.build(),
        })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self {
            agent: agent_builder(&TransportConfig::default()).build(),
        }
    }
}

fn agent_builder(config: &TransportConfig) -> AgentBuilder {
    AgentBuilder::new()
        .timeout_connect(config.connect_timeout)
        .timeout(config.request_timeout)
}

impl FormTransport for UreqTransport {
    fn post_form(&self, url: &str, body: &str) -> Result<(), TransportError> {
        let response = self
            .agent
            .post(url)
            .set("Content-Type", FORM_CONTENT_TYPE)
            .send_string(body)?;
        check_status(response.status())
    }
}

/// Accept 2xx statuses; anything else ureq hands back as a response (an
/// unfollowed redirect) counts as a failed delivery.
pub(crate) fn check_status(status: u16) -> Result<(), TransportError> {
    match status {
        200..=299 => Ok(()),
        _ => Err(TransportError::Status { status }),
    }
}
