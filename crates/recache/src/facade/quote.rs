//! # Pattern Quoting
//!
//! Formatting of pattern text in must-compile panic messages.

/// Can `text` be shown verbatim between backquotes?
///
/// True when `text` has no backquote, no byte order mark, and no control
/// characters other than tab.
pub fn can_backquote(text: &str) -> bool {
    text.chars().all(|c| match c {
        '\t' => true,
        '`' | '\u{7f}' | '\u{feff}' => false,
        c => c >= ' ',
    })
}

/// Quote pattern text for display.
///
/// ## Returns
/// `` `text` `` when [`can_backquote`] holds; otherwise an escaped,
/// double-quoted literal.
pub fn quote(text: &str) -> String {
    if can_backquote(text) {
        format!("`{text}`")
    } else {
        format!("{text:?}")
    }
}
