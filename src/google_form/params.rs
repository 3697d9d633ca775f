//! Form parameters built from a crash report.

use std::collections::BTreeMap;

use crate::report::CrashReportData;

use super::field_map::form_entry;
use super::url_encoding::encode_pairs;

/// Key of the page indicator the form expects.
pub const PAGE_NUMBER_KEY: &str = "pageNumber";
/// Key of the cache-control placeholder the form expects.
pub const BACKUP_CACHE_KEY: &str = "backupCache";
/// Key of the submit-action marker the form expects.
pub const SUBMIT_KEY: &str = "submit";

/// Constant parameters added to every submission, as the form's own HTML
/// posts them.
pub const CONSTANT_PARAMS: [(&str, &str); 3] = [
    (PAGE_NUMBER_KEY, "0"),
    (BACKUP_CACHE_KEY, ""),
    (SUBMIT_KEY, "Envoyer"),
];

/// Parameter name to value mapping posted to the form.
///
/// Built fresh for each submission by [`form_params`]; keys iterate in
/// lexicographic order so the encoded body is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormParams {
    params: BTreeMap<&'static str, String>,
}

impl FormParams {
    fn insert(&mut self, key: &'static str, value: String) {
        self.params.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Encode the parameters as an `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        encode_pairs(self.iter())
    }
}

/// Build the parameters submitted for `report`.
///
/// Fields the form has no column for are dropped. The constant parameters
/// are written last and overwrite any entry with the same key.
pub fn form_params(report: &CrashReportData) -> FormParams {
    let mut params = remap_fields(report);
    append_constants(&mut params);
    params
}

fn remap_fields(report: &CrashReportData) -> FormParams {
    let mut params = FormParams::default();
    for (field, value) in report {
        if let Some(entry) = form_entry(field) {
            params.insert(entry.key, entry.render(value));
        }
    }
    params
}

fn append_constants(params: &mut FormParams) {
    for (key, value) in CONSTANT_PARAMS {
        params.insert(key, value.to_owned());
    }
}
