use crate::stories::{SortKey, Story};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, HN_ORANGE};
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

const COLUMNS: [(SortKey, &str, u16); 4] = [
    (SortKey::Title, "Title [t]", 40),
    (SortKey::Author, "Author [a]", 30),
    (SortKey::Comment, "Comments [c]", 10),
    (SortKey::Point, "Points [p]", 10),
];

/// Rows in display order plus the header that shows the active sort.
pub struct StoryTable<'a> {
    stories: Vec<&'a Story>,
    sort: SortKey,
    selected: usize,
    focused: bool,
}

impl<'a> StoryTable<'a> {
    pub fn new(stories: Vec<&'a Story>, sort: SortKey, selected: usize, focused: bool) -> Self {
        Self {
            stories,
            sort,
            selected,
            focused,
        }
    }

    pub fn state(&self) -> TableState {
        let selected = (!self.stories.is_empty() && self.focused).then_some(self.selected);
        TableState::default().with_selected(selected)
    }

    pub fn widget(&self) -> Table<'a> {
        let header = Row::new(
            COLUMNS
                .iter()
                .map(|(key, label, _)| header_cell(label, *key == self.sort))
                .chain(std::iter::once(Cell::from("Actions")))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));

        let rows = self.stories.iter().map(|story| {
            Row::new(vec![
                Cell::from(story.title.clone()),
                Cell::from(story.author.clone()),
                Cell::from(story.num_comments.to_string()),
                Cell::from(story.points.to_string()),
                Cell::from("[d] ✓"),
            ])
        });

        let widths = COLUMNS
            .iter()
            .map(|(_, _, pct)| Constraint::Percentage(*pct))
            .chain(std::iter::once(Constraint::Percentage(10)));

        let border = if self.focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        let title = match self.sort {
            SortKey::None => " Stories ".to_string(),
            key => format!(" Stories by {} ", key.label()),
        };

        Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
            .highlight_symbol("› ")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(Line::from(title)),
            )
    }
}

fn header_cell(label: &str, active: bool) -> Cell<'static> {
    if active {
        Cell::from(format!("{label} •")).style(Style::default().fg(HN_ORANGE))
    } else {
        Cell::from(label.to_string())
    }
}
