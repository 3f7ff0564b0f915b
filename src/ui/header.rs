use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, HN_ORANGE};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    total_comments: u64,
}

impl Header {
    pub fn new(total_comments: u64) -> Self {
        Self { total_comments }
    }

    pub fn title(&self) -> String {
        format!("My Hacker Stories with {} comments.", self.total_comments)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "Y",
                Style::default().fg(HEADER_TEXT).bg(HN_ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                self.title(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
