use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: page title and one-line description of what is shown.
pub struct Header<'a> {
    title: &'a str,
    description: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, description: &'a str) -> Self {
        Self { title, description }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let description_style = Style::default().fg(MUTED_TEXT);
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(self.title, title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.description, description_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
