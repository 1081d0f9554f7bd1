//! Formatting utilities for terminal output

use crate::core::{AnswerSlots, TilePool};
use crate::practice::{SessionSummary, SubmitOutcome};

/// Placeholder shown for an empty answer slot
pub const EMPTY_SLOT: char = '_';

/// Answer row as text, e.g. `c _ t`
#[must_use]
pub fn slots_line(slots: &AnswerSlots, pool: &TilePool) -> String {
    slots
        .letters(pool)
        .into_iter()
        .map(|letter| letter.map_or(EMPTY_SLOT, char::from).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lock markers under the answer row, e.g. `^ . ^`
#[must_use]
pub fn locks_line(slots: &AnswerSlots) -> String {
    slots
        .locked()
        .iter()
        .map(|&locked| if locked { "^" } else { "." })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tile pool as numbered entries, used tiles shown as `·`
#[must_use]
pub fn tiles_line(pool: &TilePool) -> String {
    pool.tiles()
        .iter()
        .map(|tile| {
            if tile.used {
                format!("{}:·", tile.id)
            } else {
                format!("{}:{}", tile.id, tile.letter_char())
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Feedback text for a submission, `None` when nothing happened
#[must_use]
pub fn feedback_message(outcome: &SubmitOutcome) -> Option<&'static str> {
    match outcome {
        SubmitOutcome::Correct { first_try: true } => Some("🎉 Correct! Great job! ⭐"),
        SubmitOutcome::Correct { first_try: false } => Some("👍 Correct! You got it!"),
        SubmitOutcome::Incorrect { .. } => Some("🤔 Not quite, try again!"),
        SubmitOutcome::Ignored => None,
    }
}

/// End-of-session message
#[must_use]
pub fn summary_message(summary: &SessionSummary) -> String {
    format!(
        "🏆 All done! You got {} out of {} correct on the first try! 🌟",
        summary.score, summary.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TileId, TileOrigin};

    fn pool(letters: &str) -> TilePool {
        TilePool::from_letters(letters.bytes().map(|b| (b, TileOrigin::Filler)))
    }

    #[test]
    fn slots_line_marks_empty_slots() {
        let mut pool = pool("ct");
        let mut slots = AnswerSlots::new(3);
        slots.place(&mut pool, TileId::new(0));
        assert_eq!(slots_line(&slots, &pool), "c _ _");
    }

    #[test]
    fn locks_line_shows_locked_positions() {
        let slots = AnswerSlots::new(2);
        assert_eq!(locks_line(&slots), ". .");
    }

    #[test]
    fn tiles_line_hides_used_letters() {
        let mut pool = pool("ab");
        let mut slots = AnswerSlots::new(1);
        slots.place(&mut pool, TileId::new(1));
        assert_eq!(tiles_line(&pool), "0:a  1:·");
    }

    #[test]
    fn feedback_depends_on_first_try() {
        assert!(
            feedback_message(&SubmitOutcome::Correct { first_try: true })
                .unwrap()
                .contains("Great job")
        );
        assert!(
            feedback_message(&SubmitOutcome::Correct { first_try: false })
                .unwrap()
                .contains("You got it")
        );
        assert_eq!(feedback_message(&SubmitOutcome::Ignored), None);
    }

    #[test]
    fn summary_mentions_score_and_total() {
        let text = summary_message(&SessionSummary { score: 3, total: 5 });
        assert!(text.contains("You got 3 out of 5 correct on the first try"));
    }
}
