//! Single-line message box backed by `tui-textarea`.

use tui_textarea::TextArea;

use super::theme::Theme;
use crate::core::sink::InputField;

pub fn new_input(theme: &Theme) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_style(theme.input_text_style);
    textarea.set_cursor_style(theme.input_cursor_style);
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea
}

/// Flatten pasted text onto one line; the message box never holds newlines.
pub fn flatten_paste(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect()
}

impl InputField for TextArea<'_> {
    fn value(&self) -> String {
        self.lines().join("\n")
    }

    /// Start over with an empty box, keeping styles but dropping the yank
    /// buffer and undo history so a sent message cannot be pasted back.
    fn clear(&mut self) {
        let mut fresh = TextArea::default();
        fresh.set_style(self.style());
        fresh.set_cursor_style(self.cursor_style());
        fresh.set_cursor_line_style(self.cursor_line_style());
        *self = fresh;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textarea_value_and_clear() {
        let mut textarea = new_input(&Theme::dark_default());
        textarea.insert_str("  hello ");
        assert_eq!(textarea.value(), "  hello ");

        InputField::clear(&mut textarea);
        assert_eq!(textarea.value(), "");
        assert_eq!(textarea.lines(), [""]);
    }

    #[test]
    fn cleared_text_cannot_be_yanked_back() {
        let theme = Theme::dark_default();
        let mut textarea = new_input(&theme);
        textarea.insert_str("secret");

        InputField::clear(&mut textarea);
        assert!(!textarea.paste());
        assert!(!textarea.undo());
        assert_eq!(textarea.lines(), [""]);
        assert_eq!(textarea.style(), theme.input_text_style);
        assert_eq!(textarea.cursor_style(), theme.input_cursor_style);
    }

    #[test]
    fn paste_is_flattened() {
        assert_eq!(flatten_paste("one\r\ntwo\tthree\u{7}"), "one  two three");
    }
}
