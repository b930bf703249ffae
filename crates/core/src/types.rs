/// Users and series are keyed by random (v4) UUIDs generated by the service.
pub type EntityId = uuid::Uuid;

/// Episode numbers are 1-based and stored as PostgreSQL INTEGER.
pub type EpisodeNumber = i32;

/// Generate a fresh identifier for a new user or series.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4()
}
