use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::search_form::SearchForm;
use crate::ui::story_table::StoryTable;
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const ERROR_MESSAGE: &str = "Something went wrong ...";
pub const LOADING_MESSAGE: &str = "Loading ...";
pub const MORE_HINT: &str = "[m] More";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let (form_area, list_area, status_area) = body_regions(body);

    frame.render_widget(Header::new(app.total_comments()).widget(), header);

    let form = SearchForm::new(app.search(), app.focus() == Focus::Search);
    frame.render_widget(form.widget(), form_area);

    let view = app.list_view();
    let table = StoryTable::new(
        app.visible_stories(),
        view.sort,
        view.selected,
        app.focus() == Focus::List,
    );
    let mut table_state = table.state();
    frame.render_stateful_widget(table.widget(), list_area, &mut table_state);

    frame.render_widget(Paragraph::new(status_line(app)), status_area);
    frame.render_widget(Footer::new(app.focus()).widget(footer), footer);

    if let Some(position) = form.cursor(form_area) {
        frame.set_cursor_position(position);
    }
}

/// Error, loading state and the "more" affordance, left to right.
pub fn status_line(app: &App) -> Line<'static> {
    let stories = app.stories();
    let mut spans = Vec::new();
    if stories.is_error {
        spans.push(Span::styled(ERROR_MESSAGE, Style::default().fg(STATUS_ERROR)));
        spans.push(Span::raw("  "));
    }
    if stories.is_loading {
        spans.push(Span::styled(LOADING_MESSAGE, Style::default().fg(MUTED_TEXT)));
    } else {
        spans.push(Span::styled(MORE_HINT, Style::default().fg(STATUS_OK)));
        if let Some(term) = app.active_term() {
            spans.push(Span::styled(
                format!("  \"{}\" page {}", term, stories.page),
                Style::default().fg(MUTED_TEXT),
            ));
        }
    }
    Line::from(spans)
}
