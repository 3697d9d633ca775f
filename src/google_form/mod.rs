//! Crash report delivery to a Google Docs form.
//!
//! [`GoogleFormSender`] renames report fields to the form's
//! `entry.N.single` parameters, adds the constant parameters the form's
//! HTML posts, and submits the result with one blocking HTTP POST.
//!
//! # Quoted values
//!
//! The version code, version name and Android version are prefixed with `'`
//! so the receiving spreadsheet keeps numeric-looking values as text.
//!
//! # Failures
//!
//! Every failure (bad address, network error, non-2xx status) becomes a
//! [`ReportSenderError`](crate::ReportSenderError) carrying the transport
//! cause. Nothing is retried.

mod config;
mod field_map;
mod params;
mod sender;
mod transport;
mod url_encoding;


pub use config::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, FORM_RESPONSE_ENDPOINT, TransportConfig,
    form_uri,
};
pub use field_map::{FormEntry, form_entry};
pub use params::{
    BACKUP_CACHE_KEY, CONSTANT_PARAMS, FormParams, PAGE_NUMBER_KEY, SUBMIT_KEY, form_params,
};
pub use sender::GoogleFormSender;
pub use transport::{FORM_CONTENT_TYPE, FormTransport, TransportError, UreqTransport};
