//! Send/Sync guarantees for core types.

use google_form_sender::{
    CrashReportData, GoogleFormSender, GoogleFormSenderBuilder, ReportSenderError, UreqTransport,
};
use rstest::rstest;
use static_assertions::assert_impl_all;

#[rstest]
fn builders_are_send_sync() {
    assert_impl_all!(GoogleFormSenderBuilder: Send, Sync);
}

#[rstest]
fn components_are_send_sync() {
    assert_impl_all!(GoogleFormSender: Send, Sync);
    assert_impl_all!(UreqTransport: Send, Sync);
    assert_impl_all!(CrashReportData: Send, Sync);
    assert_impl_all!(ReportSenderError: Send, Sync, std::error::Error);
}
