//! Closed set of diagnostic field identifiers carried by a crash report.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for one kind of diagnostic data captured after a crash.
///
/// The serialized and displayed form is the canonical SCREAMING_SNAKE_CASE
/// name, e.g. `APP_VERSION_CODE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportField {
    ReportId,
    AppVersionCode,
    AppVersionName,
    PackageName,
    FilePath,
    PhoneModel,
    AndroidVersion,
    Board,
    Brand,
    Device,
    BuildDisplayId,
    Fingerprint,
    BuildHost,
    BuildId,
    Product,
    BuildTags,
    BuildTime,
    BuildType,
    BuildUser,
    TotalMemSize,
    AvailableMemSize,
    CustomData,
    StackTrace,
    InitialConfiguration,
    CrashConfiguration,
    Display,
    UserComment,
    UserAppStartDate,
    UserCrashDate,
    DumpsysMeminfo,
    Dropbox,
    Logcat,
    Eventslog,
    Radiolog,
    IsSilent,
    DeviceId,
    InstallationId,
    UserEmail,
    DeviceFeatures,
    Environment,
    SettingsSystem,
    SettingsSecure,
    SharedPreferences,
    ThreadDetails,
    UserIp,
    ApplicationLog,
    MediaCodecList,
}

impl ReportField {
    /// Every field identifier, in declaration order.
    pub const ALL: [ReportField; 47] = [
        Self::ReportId,
        Self::AppVersionCode,
        Self::AppVersionName,
        Self::PackageName,
        Self::FilePath,
        Self::PhoneModel,
        Self::AndroidVersion,
        Self::Board,
        Self::Brand,
        Self::Device,
        Self::BuildDisplayId,
        Self::Fingerprint,
        Self::BuildHost,
        Self::BuildId,
        Self::Product,
        Self::BuildTags,
        Self::BuildTime,
        Self::BuildType,
        Self::BuildUser,
        Self::TotalMemSize,
        Self::AvailableMemSize,
        Self::CustomData,
        Self::StackTrace,
        Self::InitialConfiguration,
        Self::CrashConfiguration,
        Self::Display,
        Self::UserComment,
        Self::UserAppStartDate,
        Self::UserCrashDate,
        Self::DumpsysMeminfo,
        Self::Dropbox,
        Self::Logcat,
        Self::Eventslog,
        Self::Radiolog,
        Self::IsSilent,
        Self::DeviceId,
        Self::InstallationId,
        Self::UserEmail,
        Self::DeviceFeatures,
        Self::Environment,
        Self::SettingsSystem,
        Self::SettingsSecure,
        Self::SharedPreferences,
        Self::ThreadDetails,
        Self::UserIp,
        Self::ApplicationLog,
        Self::MediaCodecList,
    ];

    /// Canonical name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReportId => "REPORT_ID",
            Self::AppVersionCode => "APP_VERSION_CODE",
            Self::AppVersionName => "APP_VERSION_NAME",
            Self::PackageName => "PACKAGE_NAME",
            Self::FilePath => "FILE_PATH",
            Self::PhoneModel => "PHONE_MODEL",
            Self::AndroidVersion => "ANDROID_VERSION",
            Self::Board => "BOARD",
            Self::Brand => "BRAND",
            Self::Device => "DEVICE",
            Self::BuildDisplayId => "BUILD_DISPLAY_ID",
            Self::Fingerprint => "FINGERPRINT",
            Self::BuildHost => "BUILD_HOST",
            Self::BuildId => "BUILD_ID",
            Self::Product => "PRODUCT",
            Self::BuildTags => "BUILD_TAGS",
            Self::BuildTime => "BUILD_TIME",
            Self::BuildType => "BUILD_TYPE",
            Self::BuildUser => "BUILD_USER",
            Self::TotalMemSize => "TOTAL_MEM_SIZE",
            Self::AvailableMemSize => "AVAILABLE_MEM_SIZE",
            Self::CustomData => "CUSTOM_DATA",
            Self::StackTrace => "STACK_TRACE",
            Self::InitialConfiguration => "INITIAL_CONFIGURATION",
            Self::CrashConfiguration => "CRASH_CONFIGURATION",
            Self::Display => "DISPLAY",
            Self::UserComment => "USER_COMMENT",
            Self::UserAppStartDate => "USER_APP_START_DATE",
            Self::UserCrashDate => "USER_CRASH_DATE",
            Self::DumpsysMeminfo => "DUMPSYS_MEMINFO",
            Self::Dropbox => "DROPBOX",
            Self::Logcat => "LOGCAT",
            Self::Eventslog => "EVENTSLOG",
            Self::Radiolog => "RADIOLOG",
            Self::IsSilent => "IS_SILENT",
            Self::DeviceId => "DEVICE_ID",
            Self::InstallationId => "INSTALLATION_ID",
            Self::UserEmail => "USER_EMAIL",
            Self::DeviceFeatures => "DEVICE_FEATURES",
            Self::Environment => "ENVIRONMENT",
            Self::SettingsSystem => "SETTINGS_SYSTEM",
            Self::SettingsSecure => "SETTINGS_SECURE",
            Self::SharedPreferences => "SHARED_PREFERENCES",
            Self::ThreadDetails => "THREAD_DETAILS",
            Self::UserIp => "USER_IP",
            Self::ApplicationLog => "APPLICATION_LOG",
            Self::MediaCodecList => "MEDIA_CODEC_LIST",
        }
    }
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown report field: {0}")]
pub struct UnknownReportField(pub String);

impl FromStr for ReportField {
    type Err = UnknownReportField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == upper)
            .ok_or_else(|| UnknownReportField(s.to_owned()))
    }
}
