//! INI file configuration for [`GoogleFormSenderBuilder`].
//!
//! Settings live in a `[google_form]` section:
//!
//! ```ini
//! [google_form]
//! form_key = dDN6NDdnN2I2aWU1SW5XNmNyWVljWmc6MQ
//! endpoint = https://spreadsheets.google.com/formResponse
//! connect_timeout_ms = 5000
//! request_timeout_ms = 30000
//! native_tls = false
//! ```
//!
//! Only `form_key` is required. Unknown keys are ignored with a warning.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use ini::{Ini, Properties};
use log::warn;

use crate::builder::{GoogleFormSenderBuilder, SenderBuildError};

/// Section holding the sender settings.
pub const INI_SECTION: &str = "google_form";

impl GoogleFormSenderBuilder {
    /// Load builder settings from the INI file at `path`.
    ///
    /// The file is decoded with the `encoding_rs` label `encoding`, UTF-8
    /// when `None`. The returned builder is not validated until `build`.
    ///
    /// # Errors
    ///
    /// Returns [`SenderBuildError::Io`] if the file cannot be read and
    /// [`SenderBuildError::Ini`] if it is empty, cannot be decoded, is not
    /// valid INI, or lacks the `[google_form]` section.
    pub fn from_ini_file(
        path: impl AsRef<Path>,
        encoding: Option<&str>,
    ) -> Result<Self, SenderBuildError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        if bytes.is_empty() {
            return Err(SenderBuildError::Ini(format!(
                "{} is an empty file",
                path.display()
            )));
        }
        let text = decode_with_encoding(&bytes, encoding.unwrap_or("utf-8"))?;
        Self::from_ini_str(&text)
    }

    /// Load builder settings from INI text.
    pub fn from_ini_str(text: &str) -> Result<Self, SenderBuildError> {
        let ini = Ini::load_from_str(text)
            .map_err(|err| SenderBuildError::Ini(format!("invalid INI: {err}")))?;
        let section = ini.section(Some(INI_SECTION)).ok_or_else(|| {
            SenderBuildError::Ini(format!("missing [{INI_SECTION}] section"))
        })?;
        apply_section(Self::new(), section)
    }
}

fn decode_with_encoding(bytes: &[u8], label: &str) -> Result<String, SenderBuildError> {
    let normalized_label = label.trim().to_ascii_lowercase();
    let encoding = Encoding::for_label(normalized_label.as_bytes())
        .ok_or_else(|| SenderBuildError::Ini(format!("unknown encoding {label}")))?;
    let (decoded, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(SenderBuildError::Ini(format!(
            "file is not valid {}",
            encoding.name()
        )));
    }
    Ok(decoded.into_owned())
}

fn apply_section(
    mut builder: GoogleFormSenderBuilder,
    section: &Properties,
) -> Result<GoogleFormSenderBuilder, SenderBuildError> {
    for (key, value) in section.iter() {
        let value = value.trim();
        builder = match key {
            "form_key" => builder.with_form_key(value),
            "endpoint" => builder.with_endpoint(value),
            "connect_timeout_ms" => builder.with_connect_timeout_ms(parse_u64(key, value)?),
            "request_timeout_ms" => builder.with_request_timeout_ms(parse_u64(key, value)?),
            "native_tls" => builder.with_native_tls(parse_bool(key, value)?),
            other => {
                warn!("ignoring unknown [{INI_SECTION}] key: {other}");
                builder
            }
        };
    }
    Ok(builder)
}

fn parse_u64(key: &str, value: &str) -> Result<u64, SenderBuildError> {
    value.parse().map_err(|_| {
        SenderBuildError::Ini(format!("{key} must be a non-negative integer, got {value:?}"))
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, SenderBuildError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SenderBuildError::Ini(format!(
            "{key} must be a boolean, got {value:?}"
        ))),
    }
}
