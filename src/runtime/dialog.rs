//! Native message dialogs

use rfd::{MessageButtons, MessageDialog, MessageLevel};

use mdview::commands::DialogLevel;

/// Show a blocking message box with a single OK button
pub fn show(level: DialogLevel, title: &str, message: &str) {
    let level = match level {
        DialogLevel::Info => MessageLevel::Info,
        DialogLevel::Error => MessageLevel::Error,
    };

    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
