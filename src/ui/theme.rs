use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub agent_prefix_style: Style,
    pub agent_text_style: Style,

    // Chrome
    pub title_style: Style,
    pub pending_indicator_style: Style,
    pub input_border_style: Style,
    pub input_title_style: Style,

    // Input area
    pub input_text_style: Style,
    pub input_cursor_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            agent_prefix_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            agent_text_style: Style::default().fg(Color::White),

            title_style: Style::default().fg(Color::Gray),
            pending_indicator_style: Style::default().fg(Color::Yellow),
            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),

            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn light() -> Self {
        Theme {
            user_prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            agent_prefix_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            agent_text_style: Style::default().fg(Color::Black),

            title_style: Style::default().fg(Color::DarkGray),
            pending_indicator_style: Style::default().fg(Color::Red),
            input_border_style: Style::default().fg(Color::Black),
            input_title_style: Style::default().fg(Color::DarkGray),

            input_text_style: Style::default().fg(Color::Black),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Look up a theme by config name; unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark_default(),
        }
    }
}
