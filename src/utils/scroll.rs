use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Handles wrapped-line math for the chat log pane.
///
/// Lines are wrapped here rather than by ratatui so the line count used for
/// scrolling always matches what is drawn.
pub struct ScrollCalculator;

struct Token {
    chars: Vec<(char, Style)>,
    width: usize,
    is_space: bool,
}

#[derive(Default)]
struct LineBuilder {
    spans: Vec<Span<'static>>,
    width: usize,
    emitted: bool,
}

impl LineBuilder {
    fn push_char(&mut self, ch: char, style: Style, width: usize) {
        if let Some(last) = self.spans.last_mut() {
            if last.style == style {
                last.content.to_mut().push(ch);
                self.width += width;
                return;
            }
        }
        self.spans.push(Span::styled(ch.to_string(), style));
        self.width += width;
    }

    /// End the current row at a wrap point, dropping whitespace it ends with.
    fn wrap(&mut self, out: &mut Vec<Line<'static>>) {
        while let Some(last) = self.spans.last_mut() {
            let trimmed = last.content.trim_end();
            if trimmed.len() == last.content.len() {
                break;
            }
            if trimmed.is_empty() {
                self.spans.pop();
            } else {
                let kept = trimmed.to_string();
                last.content = kept.into();
            }
        }
        self.break_line(out);
    }

    fn break_line(&mut self, out: &mut Vec<Line<'static>>) {
        out.push(Line::from(std::mem::take(&mut self.spans)));
        self.width = 0;
        self.emitted = true;
    }

    fn finish(mut self, out: &mut Vec<Line<'static>>) {
        if !self.spans.is_empty() || !self.emitted {
            self.break_line(out);
        }
    }
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

fn tokenize(line: &Line) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for span in &line.spans {
        let style = line.style.patch(span.style);
        for ch in span.content.chars() {
            let is_space = ch.is_whitespace();
            match tokens.last_mut() {
                Some(token) if token.is_space == is_space => {
                    token.chars.push((ch, style));
                    token.width += char_width(ch);
                }
                _ => tokens.push(Token {
                    chars: vec![(ch, style)],
                    width: char_width(ch),
                    is_space,
                }),
            }
        }
    }
    tokens
}

fn to_owned_line(line: &Line) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .iter()
        .map(|s| Span::styled(s.content.to_string(), line.style.patch(s.style)))
        .collect();
    Line::from(spans)
}

impl ScrollCalculator {
    /// Word-wrap `lines` to `width` columns, breaking tokens longer than a
    /// full row. Whitespace at a wrap point is dropped; empty lines stay empty.
    pub fn prewrap_lines(lines: &[Line], width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let mut out: Vec<Line<'static>> = Vec::with_capacity(lines.len());

        for line in lines {
            if width == 0 || line.spans.is_empty() {
                out.push(to_owned_line(line));
                continue;
            }

            let mut builder = LineBuilder::default();
            for token in tokenize(line) {
                if token.is_space {
                    if builder.width == 0 && builder.emitted {
                        continue;
                    }
                    if builder.width + token.width > width {
                        builder.wrap(&mut out);
                        continue;
                    }
                    for (ch, style) in token.chars {
                        builder.push_char(ch, style, char_width(ch));
                    }
                    continue;
                }

                if builder.width > 0 && builder.width + token.width > width {
                    builder.wrap(&mut out);
                }
                for (ch, style) in token.chars {
                    let w = char_width(ch);
                    if builder.width > 0 && builder.width + w > width {
                        builder.wrap(&mut out);
                    }
                    builder.push_char(ch, style, w);
                }
            }
            builder.finish(&mut out);
        }

        out
    }

    /// Largest top offset that still fills a viewport of `viewport_height` rows.
    pub fn max_scroll_offset(total_lines: usize, viewport_height: u16) -> u16 {
        let max = total_lines.saturating_sub(viewport_height as usize);
        u16::try_from(max).unwrap_or(u16::MAX)
    }
}
