//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, PlayerCharacterRepo};
use crate::use_cases::CharacterHealthUseCases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_health: CharacterHealthUseCases,
}

impl App {
    pub fn new(player_character: Arc<dyn PlayerCharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            use_cases: UseCases {
                character_health: CharacterHealthUseCases::new(player_character, clock),
            },
        }
    }
}
