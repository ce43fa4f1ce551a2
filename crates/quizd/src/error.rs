//! Domain errors for quizd.
//!
//! Every lookup failure aborts the request immediately; there are no retries.
//! Routes map these onto HTTP statuses (the original backend collapsed all of
//! them into a generic 5xx; we keep the taxonomy distinguishable).

use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("player {0} not found")]
    PlayerNotFound(i64),

    #[error("quiz {0} not found")]
    QuizNotFound(i64),

    #[error("skin {0} not found")]
    SkinNotFound(i64),

    #[error("skin '{skin}' is not unlocked for player {player}")]
    SkinLocked { player: i64, skin: String },

    #[error("storage error: {0}")]
    Store(#[from] rusqlite::Error),
}

impl GameError {
    /// HTTP status this error surfaces as.
    pub fn status(&self) -> StatusCode {
        match self {
            GameError::PlayerNotFound(_)
            | GameError::QuizNotFound(_)
            | GameError::SkinNotFound(_) => StatusCode::NOT_FOUND,
            GameError::SkinLocked { .. } => StatusCode::CONFLICT,
            GameError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(GameError::PlayerNotFound(7).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            GameError::SkinLocked { player: 1, skin: "Gold".into() }.status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            GameError::Store(rusqlite::Error::InvalidQuery).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
