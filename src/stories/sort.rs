use std::cmp::Reverse;

use super::Story;

/// Column the list view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SortKey {
    /// Arrival order.
    #[default]
    None,
    Title,
    Author,
    Comment,
    Point,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            Self::None,
            Self::Title,
            Self::Author,
            Self::Comment,
            Self::Point,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Comment => "Comments",
            Self::Point => "Points",
        }
    }
}

/// Sorted projection of `stories` by `key`.
///
/// Text columns sort ascending, counters descending. The sort is stable, so
/// ties stay in arrival order and re-sorting a sorted list is a no-op.
pub fn sorted(stories: &[Story], key: SortKey) -> Vec<&Story> {
    let mut view: Vec<&Story> = stories.iter().collect();
    match key {
        SortKey::None => {}
        SortKey::Title => view.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => view.sort_by(|a, b| a.author.cmp(&b.author)),
        SortKey::Comment => view.sort_by_key(|story| Reverse(story.num_comments)),
        SortKey::Point => view.sort_by_key(|story| Reverse(story.points)),
    }
    view
}

/// Sum of `num_comments` over `stories`, independent of display order.
pub fn total_comments(stories: &[Story]) -> u64 {
    stories.iter().map(|story| story.num_comments).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, title: &str, author: &str, comments: u64, points: u64) -> Story {
        Story {
            object_id: id.to_string(),
            title: title.to_string(),
            url: format!("https://example.com/{id}"),
            author: author.to_string(),
            num_comments: comments,
            points,
        }
    }

    fn fixture() -> Vec<Story> {
        vec![
            story("1", "Rust", "carol", 5, 10),
            story("2", "Go", "alice", 20, 3),
            story("3", "Zig", "bob", 5, 40),
            story("4", "C", "alice", 0, 10),
        ]
    }

    fn ids(view: &[&Story]) -> Vec<String> {
        view.iter().map(|s| s.object_id.clone()).collect()
    }

    #[test]
    fn none_keeps_arrival_order() {
        let data = fixture();
        assert_eq!(ids(&sorted(&data, SortKey::None)), ["1", "2", "3", "4"]);
    }

    #[test]
    fn title_sorts_ascending() {
        let data = fixture();
        assert_eq!(ids(&sorted(&data, SortKey::Title)), ["4", "2", "1", "3"]);
    }

    #[test]
    fn author_sorts_ascending_with_stable_ties() {
        let data = fixture();
        assert_eq!(ids(&sorted(&data, SortKey::Author)), ["2", "4", "3", "1"]);
    }

    #[test]
    fn comments_sort_descending_with_stable_ties() {
        let data = fixture();
        assert_eq!(ids(&sorted(&data, SortKey::Comment)), ["2", "1", "3", "4"]);
    }

    #[test]
    fn points_sort_descending() {
        let data = fixture();
        assert_eq!(ids(&sorted(&data, SortKey::Point)), ["3", "1", "4", "2"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let data = fixture();
        for &key in SortKey::all() {
            let once: Vec<Story> = sorted(&data, key).into_iter().cloned().collect();
            let twice = sorted(&once, key);
            assert_eq!(ids(&twice), ids(&once.iter().collect::<Vec<_>>()), "{key:?}");
        }
    }

    #[test]
    fn total_comments_ignores_sort_key() {
        let data = fixture();
        assert_eq!(total_comments(&data), 30);
        for &key in SortKey::all() {
            let view: Vec<Story> = sorted(&data, key).into_iter().cloned().collect();
            assert_eq!(total_comments(&view), 30);
        }
    }

    #[test]
    fn total_comments_of_empty_is_zero() {
        assert_eq!(total_comments(&[]), 0);
    }
}
