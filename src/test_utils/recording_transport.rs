//! In-memory [`FormTransport`] implementations for test assertions.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::google_form::{FormTransport, TransportError};

/// A form post captured by [`RecordingTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostedForm {
    pub url: String,
    pub body: String,
}

/// Transport that stores every post it receives and reports success.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    posts: Arc<Mutex<Vec<PostedForm>>>,
}

impl RecordingTransport {
    /// Create a new empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot of all posts received so far.
    pub fn posted(&self) -> Vec<PostedForm> {
        self.posts.lock().clone()
    }
}

impl FormTransport for RecordingTransport {
    fn post_form(&self, url: &str, body: &str) -> Result<(), TransportError> {
        self.posts.lock().push(PostedForm {
            url: url.to_owned(),
            body: body.to_owned(),
        });
        Ok(())
    }
}

/// Transport that counts attempts and fails each one with `kind`.
#[derive(Clone, Debug)]
pub struct FailingTransport {
    kind: io::ErrorKind,
    attempts: Arc<Mutex<usize>>,
}

impl FailingTransport {
    pub fn new(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            attempts: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of posts attempted through this transport.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }
}

impl FormTransport for FailingTransport {
    fn post_form(&self, _url: &str, _body: &str) -> Result<(), TransportError> {
        *self.attempts.lock() += 1;
        Err(io::Error::new(self.kind, "simulated transport failure").into())
    }
}
