//! Study-session sequencing
//!
//! A session takes a selected subsequence of entries, shuffles a copy of it,
//! and walks a single cursor forward and backward over the result. Bookmark
//! toggles on the current card are optimistic: the flag flips locally first,
//! then the remote store is asked to persist it, and the flag is rolled back
//! if that fails.

use rand::Rng;

use crate::entries::Entry;
use crate::remote::BookmarkStore;

/// Fisher-Yates shuffle over a copy of the selection.
///
/// The input is never mutated; with a uniform RNG every permutation is
/// equally likely. The RNG is a parameter so sessions are reproducible
/// under test with a seeded source.
pub fn shuffle<R: Rng>(entries: &[Entry], rng: &mut R) -> Vec<Entry> {
    let mut deck = entries.to_vec();
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(i, j);
    }
    deck
}

/// Result of an optimistic bookmark toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The flag flipped and the remote store confirmed it.
    Applied { bookmarked: bool },
    /// The remote store failed; the flag was restored to its prior value.
    RolledBack,
}

/// A cursor-navigable shuffled run over a selection of entries.
///
/// An empty selection has nothing to study, so construction returns `None`
/// instead of a session with no current card.
#[derive(Debug, Clone)]
pub struct StudySession {
    entries: Vec<Entry>,
    cursor: usize,
}

impl StudySession {
    pub fn new<R: Rng>(selection: Vec<Entry>, rng: &mut R) -> Option<Self> {
        if selection.is_empty() {
            return None;
        }
        Some(Self {
            entries: shuffle(&selection, rng),
            cursor: 0,
        })
    }

    /// The card currently being viewed.
    pub fn current(&self) -> &Entry {
        &self.entries[self.cursor]
    }

    /// Zero-based cursor position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed session (`new` rejects empty
    /// selections); exists only to pair with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move to the next card. Returns false (and stays put) at the last one.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous card. Returns false (and stays put) at the first.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Toggle the bookmark on the current card, optimistically.
    ///
    /// The flag flips before the store is consulted; a store failure rolls
    /// it back to exactly its prior value. The shuffle order and the cursor
    /// are never affected.
    pub fn attempt_toggle(&mut self, store: &dyn BookmarkStore) -> ToggleOutcome {
        let entry = &mut self.entries[self.cursor];
        let previous = entry.bookmark;
        let desired = !previous.unwrap_or(false);
        entry.bookmark = Some(desired);

        match store.set_bookmark(&entry.date, &entry.sentence, desired) {
            Ok(()) => ToggleOutcome::Applied {
                bookmarked: desired,
            },
            Err(err) => {
                log::warn!(
                    "Failed to persist bookmark for \"{}\": {}",
                    entry.sentence,
                    err
                );
                entry.bookmark = previous;
                ToggleOutcome::RolledBack
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::remote::RemoteError;

    struct AcceptingStore;

    impl BookmarkStore for AcceptingStore {
        fn set_bookmark(&self, _date: &str, _sentence: &str, _bookmark: bool) -> Result<(), RemoteError> {
            Ok(())
        }
    }

    struct FailingStore;

    impl BookmarkStore for FailingStore {
        fn set_bookmark(&self, _date: &str, _sentence: &str, _bookmark: bool) -> Result<(), RemoteError> {
            Err(RemoteError::Server {
                status: 500,
                message: "script error".into(),
            })
        }
    }

    fn entries(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|i| Entry::new("2024-05-01".into(), format!("sentence {}", i), format!("meaning {}", i)))
            .collect()
    }

    fn sentences(entries: &[Entry]) -> Vec<String> {
        let mut out: Vec<String> = entries.iter().map(|e| e.sentence.clone()).collect();
        out.sort();
        out
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let input = entries(25);
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = shuffle(&input, &mut rng);
        assert_eq!(shuffled.len(), input.len());
        assert_eq!(sentences(&shuffled), sentences(&input));
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let input = entries(10);
        let snapshot = input.clone();
        let mut rng = StdRng::seed_from_u64(7);
        let _ = shuffle(&input, &mut rng);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_shuffle_is_reproducible_with_a_seed() {
        let input = entries(10);
        let first = shuffle(&input, &mut StdRng::seed_from_u64(42));
        let second = shuffle(&input, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_trivial_inputs_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffle(&[], &mut rng).is_empty());
        let single = entries(1);
        assert_eq!(shuffle(&single, &mut rng), single);
    }

    #[test]
    fn test_empty_selection_has_nothing_to_study() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(StudySession::new(Vec::new(), &mut rng).is_none());
        // A session that did construct is never empty
        let session = StudySession::new(entries(1), &mut rng).unwrap();
        assert!(!session.is_empty());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_cursor_saturates_at_both_ends() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = StudySession::new(entries(3), &mut rng).unwrap();
        assert_eq!(session.position(), 0);

        // Retreat from the first card is a no-op
        assert!(!session.retreat());
        assert_eq!(session.position(), 0);

        assert!(session.advance());
        assert!(session.advance());
        assert_eq!(session.position(), 2);

        // Advancing past the last card is a no-op
        assert!(!session.advance());
        assert_eq!(session.position(), 2);
    }

    #[test]
    fn test_toggle_applies_optimistically() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = StudySession::new(entries(3), &mut rng).unwrap();
        let outcome = session.attempt_toggle(&AcceptingStore);
        assert_eq!(outcome, ToggleOutcome::Applied { bookmarked: true });
        assert!(session.current().is_bookmarked());

        // Toggling again clears it
        let outcome = session.attempt_toggle(&AcceptingStore);
        assert_eq!(outcome, ToggleOutcome::Applied { bookmarked: false });
        assert!(!session.current().is_bookmarked());
    }

    #[test]
    fn test_toggle_rolls_back_on_store_failure() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = StudySession::new(entries(3), &mut rng).unwrap();
        assert_eq!(session.current().bookmark, None);

        let outcome = session.attempt_toggle(&FailingStore);
        assert_eq!(outcome, ToggleOutcome::RolledBack);
        // Restored to the literal prior value, not merely an equal one
        assert_eq!(session.current().bookmark, None);
    }

    #[test]
    fn test_toggle_does_not_move_the_cursor() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = StudySession::new(entries(3), &mut rng).unwrap();
        session.advance();
        let before = session.position();
        session.attempt_toggle(&FailingStore);
        session.attempt_toggle(&AcceptingStore);
        assert_eq!(session.position(), before);
    }
}
