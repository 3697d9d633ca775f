//! Finished crash report handed to a sender.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use super::field::ReportField;

/// Diagnostic values captured after a crash, keyed by [`ReportField`].
///
/// The collector fills this in upstream; senders only read it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrashReportData {
    fields: BTreeMap<ReportField, String>,
}

impl CrashReportData {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `field`, returning the value it replaced.
    pub fn insert(&mut self, field: ReportField, value: impl Into<String>) -> Option<String> {
        self.fields.insert(field, value.into())
    }

    pub fn get(&self, field: ReportField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: ReportField) -> Option<String> {
        self.fields.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the populated fields in identifier order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.fields.iter(),
        }
    }
}

/// Iterator over the populated fields of a [`CrashReportData`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, ReportField, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (ReportField, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(field, value)| (*field, value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a CrashReportData {
    type Item = (ReportField, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Into<String>> FromIterator<(ReportField, V)> for CrashReportData {
    fn from_iter<I: IntoIterator<Item = (ReportField, V)>>(iter: I) -> Self {
        let mut report = Self::new();
        report.extend(iter);
        report
    }
}

impl<V: Into<String>> Extend<(ReportField, V)> for CrashReportData {
    fn extend<I: IntoIterator<Item = (ReportField, V)>>(&mut self, iter: I) {
        for (field, value) in iter {
            self.insert(field, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_previous_value() {
        let mut report = CrashReportData::new();
        assert_eq!(report.insert(ReportField::Brand, "acme"), None);
        assert_eq!(
            report.insert(ReportField::Brand, "globex"),
            Some("acme".to_owned())
        );
        assert_eq!(report.get(ReportField::Brand), Some("globex"));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn collects_from_pairs() {
        let report: CrashReportData = [
            (ReportField::StackTrace, "trace"),
            (ReportField::PhoneModel, "Nexus One"),
        ]
        .into_iter()
        .collect();

        let fields: Vec<_> = report.iter().collect();
        assert_eq!(
            fields,
            vec![
                (ReportField::PhoneModel, "Nexus One"),
                (ReportField::StackTrace, "trace"),
            ]
        );
    }

    #[test]
    fn deserialises_from_field_named_json() {
        let report: CrashReportData =
            serde_json::from_str(r#"{"APP_VERSION_CODE":"42","LOGCAT":"I/app: boot"}"#)
                .expect("deserialise");
        assert_eq!(report.get(ReportField::AppVersionCode), Some("42"));
        assert_eq!(report.get(ReportField::Logcat), Some("I/app: boot"));
        assert!(report.get(ReportField::StackTrace).is_none());
    }

    #[test]
    fn remove_empties_report() {
        let mut report: CrashReportData = [(ReportField::DeviceId, "abc")].into_iter().collect();
        assert_eq!(report.remove(ReportField::DeviceId), Some("abc".to_owned()));
        assert!(report.is_empty());
    }
}
