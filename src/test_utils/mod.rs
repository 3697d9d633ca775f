//! Transports for exercising senders without a network.
//!
//! Compiled for unit tests and, through the `test-util` feature, for
//! integration tests and benchmarks.

mod recording_transport;

pub use recording_transport::{FailingTransport, PostedForm, RecordingTransport};
