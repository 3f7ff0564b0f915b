use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::stories::SortKey;
use crate::ui::app::{App, Focus};
use crate::ui::search::SearchIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.on_search_input(SearchIntent::Clear);
        return;
    }

    match key.code {
        KeyCode::Enter => {
            if app.on_search_submit() {
                app.set_focus(Focus::List);
            }
        }
        KeyCode::Backspace => app.on_search_input(SearchIntent::Backspace),
        KeyCode::Down => app.set_focus(Focus::List),
        KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.on_search_input(SearchIntent::Insert(ch));
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if has_command_modifier(key) {
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Delete | KeyCode::Char('d') => app.remove_selected(),
        KeyCode::Enter | KeyCode::Char('o') => open_selected(app),
        KeyCode::Char('m') => {
            app.on_more();
        }
        KeyCode::Char('/') | KeyCode::Esc => app.set_focus(Focus::Search),
        KeyCode::Char(ch) => {
            if let Some(sort) = sort_key_for(ch) {
                app.sort_by(sort);
            }
        }
        _ => {}
    }
}

fn open_selected(app: &App) {
    let Some(url) = app.selected_url() else {
        return;
    };
    if let Err(err) = open::that_detached(url) {
        tracing::warn!(%url, "failed to open story: {}", err);
    }
}

/// List-view shortcut for each sort column.
pub fn sort_key_for(ch: char) -> Option<SortKey> {
    match ch {
        'n' => Some(SortKey::None),
        't' => Some(SortKey::Title),
        'a' => Some(SortKey::Author),
        'c' => Some(SortKey::Comment),
        'p' => Some(SortKey::Point),
        _ => None,
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
