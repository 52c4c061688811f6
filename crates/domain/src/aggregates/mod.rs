//! Aggregates - consistency boundaries loaded and saved as a whole

pub mod player_character;

pub use player_character::PlayerCharacter;
