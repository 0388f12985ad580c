//! Toggle logic for the shared button label.
//!
//! Three buttons share one text element. Clicking a button shows its caption;
//! clicking the button whose caption is already shown clears the label.

/// Returns the label text after a button with `clicked` as its caption is
/// activated while the label currently shows `current`.
pub fn next_label(current: &str, clicked: &str) -> String {
    if current == clicked {
        String::new()
    } else {
        clicked.to_owned()
    }
}
