use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Word;

/// One pass over a shuffled snapshot of the profile's words.
///
/// The cursor walks forward only: `0 <= cursor <= words.len()`, and
/// `cursor == words.len()` is the terminal results state. `revealed` flips
/// back to false on every advance.
#[derive(Debug)]
pub struct QuizSession {
    words: Vec<Word>,
    cursor: usize,
    revealed: bool,
}

impl QuizSession {
    /// Snapshot and shuffle the fetched words. Works on a copy; the source
    /// collection is never reordered.
    pub fn new<R: Rng>(words: &[Word], rng: &mut R) -> Self {
        let mut snapshot = words.to_vec();
        snapshot.shuffle(rng);
        Self {
            words: snapshot,
            cursor: 0,
            revealed: false,
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.words.len()
    }

    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.cursor)
    }

    /// Show the definition side of the current card. No side effect.
    pub fn reveal(&mut self) {
        if !self.is_finished() {
            self.revealed = true;
        }
    }

    /// Advance without crediting mastery.
    pub fn skip(&mut self) {
        self.advance();
    }

    /// Credit the current word and advance. Returns the `(word_id, new_level)`
    /// pair the caller must push to the store; the advance happens regardless
    /// of whether that request later succeeds. Only legal once the definition
    /// is revealed.
    pub fn mark_learned(&mut self) -> Option<(i64, u32)> {
        if !self.revealed {
            return None;
        }
        let word = self.words.get(self.cursor)?;
        let update = (word.id, word.level + 1);
        self.advance();
        Some(update)
    }

    /// Replace the snapshot entry matching the server-confirmed word.
    pub fn apply_updated(&mut self, word: &Word) {
        if let Some(slot) = self.words.iter_mut().find(|w| w.id == word.id) {
            *slot = word.clone();
        }
    }

    /// Drop a word whose remote deletion was confirmed. The sequence shortens
    /// in place, so when the current word was removed the cursor keeps its
    /// index and now addresses the next undeleted word (or the machine is
    /// finished when it was the last one).
    pub fn apply_removed(&mut self, word_id: i64) {
        if let Some(pos) = self.words.iter().position(|w| w.id == word_id) {
            self.words.remove(pos);
            if pos < self.cursor {
                self.cursor -= 1;
            } else if pos == self.cursor {
                self.revealed = false;
            }
        }
    }

    fn advance(&mut self) {
        if self.cursor < self.words.len() {
            self.cursor += 1;
        }
        self.revealed = false;
    }
}

/// Screen-level quiz state. `Loading` covers the span between entering the
/// quiz and the word fetch coming back; a failed fetch parks the error here so
/// the view can offer a retry, and an empty fetch stays in `Loading` for good
/// (there is nothing to quiz).
#[derive(Debug)]
pub enum QuizScreen {
    Loading { error: Option<String> },
    Ready(QuizSession),
}

impl QuizScreen {
    pub fn loading() -> Self {
        QuizScreen::Loading { error: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(id: i64, term: &str, level: u32) -> Word {
        Word {
            id,
            profile_id: 1,
            term: term.to_string(),
            definition: format!("{}-def", term),
            example_sentence: String::new(),
            meaning_of_example_sentence: String::new(),
            level,
        }
    }

    fn words(n: i64) -> Vec<Word> {
        (1..=n).map(|i| word(i, &format!("w{}", i), 0)).collect()
    }

    fn session(n: i64) -> QuizSession {
        QuizSession::new(&words(n), &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn shuffle_preserves_the_multiset_and_leaves_the_source_alone() {
        let source = words(20);
        let before = source.clone();
        let session = QuizSession::new(&source, &mut StdRng::seed_from_u64(7));

        assert_eq!(source, before);

        let mut shuffled_ids: Vec<i64> = session.words().iter().map(|w| w.id).collect();
        shuffled_ids.sort_unstable();
        let expected: Vec<i64> = (1..=20).collect();
        assert_eq!(shuffled_ids, expected);
    }

    #[test]
    fn different_seeds_produce_different_orderings() {
        let source = words(20);
        let a = QuizSession::new(&source, &mut StdRng::seed_from_u64(1));
        let b = QuizSession::new(&source, &mut StdRng::seed_from_u64(2));
        let ids = |s: &QuizSession| s.words().iter().map(|w| w.id).collect::<Vec<_>>();
        assert_ne!(ids(&a), ids(&b));
    }

    #[test]
    fn exactly_n_advances_reach_finished() {
        let mut session = session(5);
        assert_eq!(session.cursor(), 0);

        for step in 0..5 {
            assert!(!session.is_finished(), "finished early at step {}", step);
            if step % 2 == 0 {
                session.skip();
            } else {
                session.reveal();
                session.mark_learned();
            }
            assert!(!session.revealed(), "revealed survived an advance");
        }
        assert!(session.is_finished());
        assert_eq!(session.cursor(), session.total());
    }

    #[test]
    fn reveal_only_flips_the_flag() {
        let mut session = session(3);
        let cursor = session.cursor();
        session.reveal();
        assert!(session.revealed());
        assert_eq!(session.cursor(), cursor);
        // Revealing twice is idempotent.
        session.reveal();
        assert!(session.revealed());
    }

    #[test]
    fn mark_learned_requires_a_reveal_first() {
        let mut session = session(3);
        assert_eq!(session.mark_learned(), None);
        assert_eq!(session.cursor(), 0);

        session.reveal();
        let current_id = session.current().unwrap().id;
        let (id, level) = session.mark_learned().unwrap();
        assert_eq!(id, current_id);
        assert_eq!(level, 1);
        assert_eq!(session.cursor(), 1);
        assert!(!session.revealed());
    }

    #[test]
    fn mark_learned_requests_level_plus_one() {
        let source = vec![word(9, "apple", 4)];
        let mut session = QuizSession::new(&source, &mut StdRng::seed_from_u64(0));
        session.reveal();
        assert_eq!(session.mark_learned(), Some((9, 5)));
        assert!(session.is_finished());
    }

    #[test]
    fn apply_updated_replaces_only_the_confirmed_word() {
        let mut session = session(3);
        let target = session.words()[1].clone();
        let confirmed = Word {
            level: target.level + 1,
            ..target.clone()
        };

        session.apply_updated(&confirmed);
        assert_eq!(session.words()[1].level, target.level + 1);
        assert_eq!(session.words()[1].term, target.term);
        assert_eq!(session.words()[0].level, 0);
        assert_eq!(session.words()[2].level, 0);
    }

    #[test]
    fn removing_the_current_word_keeps_the_cursor_index() {
        let mut session = session(3);
        session.skip();
        session.reveal();
        let removed = session.current().unwrap().id;
        let next = session.words()[2].id;

        session.apply_removed(removed);
        assert_eq!(session.total(), 2);
        assert_eq!(session.cursor(), 1);
        assert!(!session.revealed());
        assert_eq!(session.current().unwrap().id, next);
    }

    #[test]
    fn removing_the_last_remaining_word_finishes_the_quiz() {
        let mut session = session(1);
        let id = session.current().unwrap().id;
        session.apply_removed(id);
        assert!(session.is_finished());
        assert_eq!(session.total(), 0);
    }

    #[test]
    fn removing_an_already_passed_word_shifts_the_cursor_back() {
        let mut session = session(3);
        let passed = session.current().unwrap().id;
        session.skip();
        let current = session.current().unwrap().id;

        session.apply_removed(passed);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.current().unwrap().id, current);
        assert_eq!(session.total(), 2);
    }

    #[test]
    fn skip_past_the_end_is_a_no_op() {
        let mut session = session(1);
        session.skip();
        assert!(session.is_finished());
        session.skip();
        assert_eq!(session.cursor(), 1);
        session.reveal();
        assert!(!session.revealed());
        assert_eq!(session.mark_learned(), None);
    }

    #[test]
    fn empty_snapshot_is_immediately_finished() {
        let session = QuizSession::new(&[], &mut StdRng::seed_from_u64(0));
        assert!(session.is_finished());
        assert!(session.current().is_none());
    }
}
