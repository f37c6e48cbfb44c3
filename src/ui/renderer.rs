use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::chat_loop::{ChatScreen, Viewport};
use super::layout::LayoutEngine;
use crate::utils::scroll::ScrollCalculator;

pub fn ui(f: &mut Frame, screen: &mut ChatScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(f.area());

    let log_area = chunks[0];
    let messages = screen.log().messages();
    let lines = LayoutEngine::layout_messages(&messages, &screen.theme, &screen.labels, log_area.width);

    // One row goes to the title
    let available_height = log_area.height.saturating_sub(1);
    let max_offset = ScrollCalculator::max_scroll_offset(lines.len(), available_height);
    let scroll_offset = screen.log().resolve_offset(max_offset);
    screen.viewport = Viewport {
        height: available_height,
        max_offset,
    };

    let title = Line::from(Span::styled(
        format!("chatline • {}", screen.endpoint),
        screen.theme.title_style,
    ));
    let messages_paragraph = Paragraph::new(lines)
        .block(Block::default().title(title))
        .scroll((scroll_offset, 0));
    f.render_widget(messages_paragraph, log_area);

    let pending = screen.in_flight();
    let input_title = if pending > 0 {
        Line::from(vec![
            Span::styled("Message ", screen.theme.input_title_style),
            Span::styled(
                format!("(waiting on {pending})"),
                screen.theme.pending_indicator_style,
            ),
        ])
    } else {
        Line::from(Span::styled(
            "Message (Enter to send, Esc to quit)",
            screen.theme.input_title_style,
        ))
    };

    let border_style = screen.theme.input_border_style;
    let input = screen.input_mut();
    input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(input_title),
    );
    f.render_widget(&*input, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::ChatMessage;
    use crate::core::sink::MessageSink;
    use crate::ui::chat_loop::test_support::screen_with_reply;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[tokio::test]
    async fn renders_title_messages_and_input_box() {
        let (mut screen, _rx) = screen_with_reply("unused");
        screen.log().append(ChatMessage::user("hello"));
        screen.log().append(ChatMessage::agent("hi there"));

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|f| ui(f, &mut screen)).unwrap();
        let buffer = terminal.backend().buffer().clone();

        assert!(row_text(&buffer, 0).starts_with("chatline • http://stub.test"));
        assert_eq!(row_text(&buffer, 1), "You: hello");
        assert_eq!(row_text(&buffer, 3), "Agent: hi there");
        assert!(row_text(&buffer, 7).contains("Enter to send"));
        assert_eq!(screen.viewport.height, 6);
        assert_eq!(screen.viewport.max_offset, 0);
    }

    #[tokio::test]
    async fn long_logs_render_pinned_to_the_bottom() {
        let (mut screen, _rx) = screen_with_reply("unused");
        for i in 0..10 {
            screen.log().append(ChatMessage::agent(format!("line {i}")));
        }

        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal.draw(|f| ui(f, &mut screen)).unwrap();
        let buffer = terminal.backend().buffer().clone();

        // 20 wrapped lines in a 4-row viewport
        assert_eq!(screen.viewport.max_offset, 16);
        assert_eq!(row_text(&buffer, 3), "Agent: line 9");
        assert_eq!(row_text(&buffer, 4), "");
    }
}
