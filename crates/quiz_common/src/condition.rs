//! Unlock-condition strings.
//!
//! Score-based conditions use the form `PASS_QUIZZES:<n>` and are matched by
//! exact string equality against the player's current total score. A reward
//! tied to a score the player skips past is never granted; that is documented
//! behavior, not something to patch here.

/// Prefix of score-based unlock conditions.
pub const PASS_QUIZZES_PREFIX: &str = "PASS_QUIZZES:";

/// Build the condition string for a total score.
pub fn pass_quizzes(total_score: i64) -> String {
    format!("{PASS_QUIZZES_PREFIX}{total_score}")
}

/// Parse the score out of a `PASS_QUIZZES:<n>` condition, if it is one.
pub fn parse_pass_quizzes(condition: &str) -> Option<i64> {
    condition
        .strip_prefix(PASS_QUIZZES_PREFIX)
        .and_then(|n| n.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_condition_for_score() {
        assert_eq!(pass_quizzes(5), "PASS_QUIZZES:5");
        assert_eq!(pass_quizzes(0), "PASS_QUIZZES:0");
    }

    #[test]
    fn parses_own_output() {
        assert_eq!(parse_pass_quizzes(&pass_quizzes(42)), Some(42));
    }

    #[test]
    fn rejects_foreign_conditions() {
        assert_eq!(parse_pass_quizzes("SCORE:100"), None);
        assert_eq!(parse_pass_quizzes("PASS_QUIZZES:"), None);
        assert_eq!(parse_pass_quizzes("PASS_QUIZZES:abc"), None);
    }
}
