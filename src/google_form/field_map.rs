//! Mapping from report fields to the form's `entry.N.single` parameters.
//!
//! The receiving spreadsheet was laid out once and its column keys are fixed,
//! so this table must stay byte-for-byte stable.

use crate::report::ReportField;

/// Destination parameter for one report field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormEntry {
    /// Form parameter name, e.g. `entry.21.single`.
    pub key: &'static str,
    /// Prefix the value with `'` so the spreadsheet stores it as text.
    pub quoted: bool,
}

impl FormEntry {
    const fn plain(key: &'static str) -> Self {
        Self { key, quoted: false }
    }

    const fn quoted(key: &'static str) -> Self {
        Self { key, quoted: true }
    }

    /// Render `value` the way the form expects it for this entry.
    pub fn render(&self, value: &str) -> String {
        if self.quoted {
            let mut out = String::with_capacity(value.len() + 1);
            out.push('\'');
            out.push_str(value);
            out
        } else {
            value.to_owned()
        }
    }
}

/// Look up the form parameter for `field`.
///
/// Returns `None` for fields the form has no column for.
pub const fn form_entry(field: ReportField) -> Option<FormEntry> {
    use ReportField::*;

    match field {
        AppVersionCode => Some(FormEntry::quoted("entry.0.single")),
        AppVersionName => Some(FormEntry::quoted("entry.1.single")),
        PackageName => Some(FormEntry::plain("entry.2.single")),
        FilePath => Some(FormEntry::plain("entry.3.single")),
        PhoneModel => Some(FormEntry::plain("entry.4.single")),
        AndroidVersion => Some(FormEntry::quoted("entry.5.single")),
        Board => Some(FormEntry::plain("entry.6.single")),
        Brand => Some(FormEntry::plain("entry.7.single")),
        Device => Some(FormEntry::plain("entry.8.single")),
        BuildDisplayId => Some(FormEntry::plain("entry.9.single")),
        Fingerprint => Some(FormEntry::plain("entry.10.single")),
        BuildHost => Some(FormEntry::plain("entry.11.single")),
        BuildId => Some(FormEntry::plain("entry.12.single")),
        Product => Some(FormEntry::plain("entry.13.single")),
        BuildTags => Some(FormEntry::plain("entry.14.single")),
        BuildTime => Some(FormEntry::plain("entry.15.single")),
        BuildType => Some(FormEntry::plain("entry.16.single")),
        BuildUser => Some(FormEntry::plain("entry.17.single")),
        TotalMemSize => Some(FormEntry::plain("entry.18.single")),
        AvailableMemSize => Some(FormEntry::plain("entry.19.single")),
        CustomData => Some(FormEntry::plain("entry.20.single")),
        StackTrace => Some(FormEntry::plain("entry.21.single")),
        InitialConfiguration => Some(FormEntry::plain("entry.22.single")),
        CrashConfiguration => Some(FormEntry::plain("entry.23.single")),
        Display => Some(FormEntry::plain("entry.24.single")),
        UserComment => Some(FormEntry::plain("entry.25.single")),
        UserAppStartDate => Some(FormEntry::plain("entry.26.single")),
        UserCrashDate => Some(FormEntry::plain("entry.27.single")),
        DumpsysMeminfo => Some(FormEntry::plain("entry.28.single")),
        Dropbox => Some(FormEntry::plain("entry.29.single")),
        Logcat => Some(FormEntry::plain("entry.30.single")),
        Eventslog => Some(FormEntry::plain("entry.31.single")),
        Radiolog => Some(FormEntry::plain("entry.32.single")),
        DeviceId => Some(FormEntry::plain("entry.33.single")),
        UserEmail => Some(FormEntry::plain("entry.34.single")),
        DeviceFeatures => Some(FormEntry::plain("entry.35.single")),
        ReportId | IsSilent | InstallationId | Environment | SettingsSystem | SettingsSecure
        | SharedPreferences | ThreadDetails | UserIp | ApplicationLog | MediaCodecList => None,
    }
}
