use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("User not found.")]
    UserNotFound,

    /// `id` is the raw path segment, which may not even be a valid UUID.
    #[error("Serie not found")]
    SeriesNotFound { id: String },

    /// `number` is `None` when the request carried no integral episode number.
    #[error("Invalid episode")]
    EpisodeNotFound {
        series_id: EntityId,
        number: Option<i64>,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}
