//! Series and episode models and DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serieswatch_core::error::CoreError;
use serieswatch_core::tracking::{episode_numbers, progress_percent, validate_episode_count};
use serieswatch_core::types::{new_entity_id, EntityId, EpisodeNumber};
use sqlx::FromRow;

use crate::models::lenient;

/// A single numbered episode within a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Episode {
    pub number: EpisodeNumber,
    pub watched: bool,
}

/// A tracked series with its episodes, as returned by the API.
///
/// The episode count keeps the `qt_episodes` wire name used by the request
/// body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: EntityId,
    pub name: String,
    pub qt_episodes: EpisodeNumber,
    pub episodes: Vec<Episode>,
}

impl Series {
    /// Build a new series with a fresh id and episodes `1..=qt_episodes`,
    /// none of them watched.
    pub fn new(input: &CreateSeries) -> Result<Self, CoreError> {
        let qt_episodes = validate_episode_count(input.qt_episodes)?;
        let episodes = episode_numbers(qt_episodes)
            .map(|number| Episode {
                number,
                watched: false,
            })
            .collect();

        Ok(Self {
            id: new_entity_id(),
            name: input.name.clone(),
            qt_episodes,
            episodes,
        })
    }

    /// First episode whose number equals `number` exactly.
    pub fn episode(&self, number: i64) -> Option<&Episode> {
        self.episodes
            .iter()
            .find(|episode| i64::from(episode.number) == number)
    }

    /// Set `watched` on the numbered episode. Returns `false` if absent.
    pub fn mark_watched(&mut self, number: EpisodeNumber) -> bool {
        match self.episodes.iter_mut().find(|e| e.number == number) {
            Some(episode) => {
                episode.watched = true;
                true
            }
            None => false,
        }
    }

    pub fn watched_count(&self) -> usize {
        self.episodes.iter().filter(|e| e.watched).count()
    }

    /// Watched share of `qt_episodes` as a rounded integer percentage.
    pub fn progress(&self) -> u32 {
        let total = usize::try_from(self.qt_episodes).unwrap_or(0);
        progress_percent(self.watched_count(), total)
    }
}

/// Row from the `series` table (episodes are loaded separately).
#[derive(Debug, Clone, FromRow)]
pub struct SeriesRow {
    pub id: EntityId,
    pub name: String,
    pub qt_episodes: EpisodeNumber,
}

impl SeriesRow {
    pub fn into_series(self, episodes: Vec<Episode>) -> Series {
        Series {
            id: self.id,
            name: self.name,
            qt_episodes: self.qt_episodes,
            episodes,
        }
    }
}

/// Row from the `episodes` table, tagged with its series.
#[derive(Debug, Clone, FromRow)]
pub struct EpisodeRow {
    pub series_id: EntityId,
    pub number: EpisodeNumber,
    pub watched: bool,
}

/// DTO for creating a series. Missing or wrong-typed fields default to
/// empty / zero.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSeries {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::count_or_zero")]
    pub qt_episodes: u32,
}

/// DTO for marking an episode watched.
///
/// `ep_number` is kept as raw JSON; only a number equal to an integer can
/// name an episode.
#[derive(Debug, Default, Deserialize)]
pub struct MarkEpisodeWatched {
    #[serde(default)]
    pub ep_number: Option<Value>,
}

impl MarkEpisodeWatched {
    pub fn episode_number(&self) -> Option<i64> {
        self.ep_number.as_ref().and_then(lenient::integral)
    }
}
