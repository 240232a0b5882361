//! Toast notifications for workflow notices.

use contracts::domain::common::{Notice, NoticeKind};
use leptos::prelude::*;
use thaw::*;

fn intent(kind: NoticeKind) -> ToastIntent {
    match kind {
        NoticeKind::Success => ToastIntent::Success,
        NoticeKind::Error => ToastIntent::Error,
    }
}

/// Show a notice through the app-wide toaster.
pub fn notify(toaster: &ToasterInjection, notice: Notice) {
    let options = ToastOptions::default()
        .with_position(ToastPosition::TopEnd)
        .with_intent(intent(notice.kind));
    let text = notice.text;
    toaster.dispatch_toast(
        move || {
            view! {
                <Toast>
                    <ToastTitle>{text}</ToastTitle>
                </Toast>
            }
        },
        options,
    );
}
