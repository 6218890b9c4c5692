use rfd::{MessageButtons, MessageDialog, MessageLevel};

pub fn show_notice(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Approved quotations")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
