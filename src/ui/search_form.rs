use crate::ui::search::SearchFormState;
use crate::ui::theme::{FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_OK};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const LABEL: &str = "Search: ";

/// The one-line search box with its submit hint.
pub struct SearchForm<'a> {
    state: &'a SearchFormState,
    focused: bool,
}

impl<'a> SearchForm<'a> {
    pub fn new(state: &'a SearchFormState, focused: bool) -> Self {
        Self { state, focused }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let submit_style = if self.state.can_submit() {
            Style::default().fg(STATUS_OK)
        } else {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        };
        let border = if self.focused { FOCUS_BORDER } else { GLOBAL_BORDER };

        let line = Line::from(vec![
            Span::styled(LABEL, Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
            Span::styled(self.state.term.as_str(), Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title_bottom(Line::from(Span::styled(" Enter: Submit ", submit_style)).right_aligned()),
        )
    }

    /// Where the text cursor goes when the form has focus.
    pub fn cursor(&self, area: Rect) -> Option<Position> {
        if !self.focused || area.width < 3 || area.height < 3 {
            return None;
        }
        // Display width, so wide glyphs advance the cursor by two cells.
        let width = Span::raw(LABEL).width() + Span::raw(self.state.term.as_str()).width();
        let offset = u16::try_from(width).unwrap_or(u16::MAX);
        let max_x = area.right().saturating_sub(2);
        let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
        Some(Position::new(x, area.y + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_for(term: &str) -> Option<Position> {
        let state = SearchFormState::new(term);
        SearchForm::new(&state, true).cursor(Rect::new(0, 3, 120, 3))
    }

    #[test]
    fn cursor_follows_term() {
        assert_eq!(cursor_for("rust"), Some(Position::new(13, 4)));
    }

    #[test]
    fn cursor_counts_wide_glyphs_by_width() {
        assert_eq!(cursor_for("日本"), Some(Position::new(13, 4)));
    }

    #[test]
    fn very_long_term_clamps_to_right_edge() {
        let term = "x".repeat(65_527);
        assert_eq!(cursor_for(&term), Some(Position::new(118, 4)));

        let term = "x".repeat(70_000);
        assert_eq!(cursor_for(&term), Some(Position::new(118, 4)));
    }

    #[test]
    fn no_cursor_without_focus() {
        let state = SearchFormState::new("rust");
        assert_eq!(SearchForm::new(&state, false).cursor(Rect::new(0, 3, 120, 3)), None);
    }
}
