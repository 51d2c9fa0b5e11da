use crate::domain::tweet::TweetId;

/// Selected tweets, most recently selected first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<TweetId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `id` if present, otherwise puts it at the front.
    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: TweetId) -> bool {
        if let Some(position) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.insert(0, id);
            true
        }
    }

    pub fn contains(&self, id: TweetId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = TweetId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_prepends_then_removes() {
        let mut selection = Selection::new();
        assert!(selection.toggle(TweetId(3)));
        assert!(selection.toggle(TweetId(7)));
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![TweetId(7), TweetId(3)]);

        assert!(!selection.toggle(TweetId(3)));
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![TweetId(7)]);
        assert!(!selection.contains(TweetId(3)));
    }

    #[test]
    fn test_reselecting_moves_to_front() {
        let mut selection = Selection::new();
        selection.toggle(TweetId(1));
        selection.toggle(TweetId(2));
        selection.toggle(TweetId(1));
        selection.toggle(TweetId(1));
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![TweetId(1), TweetId(2)]);
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.toggle(TweetId(0));
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }
}
