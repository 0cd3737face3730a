pub mod card;
pub mod config;
pub mod sched;

// Gesture engine, deck controller and screen chrome
pub mod mobile;

// Frame-level helpers for whatever draws the cards
pub mod render;

pub use card::{Card, CardId, CardPayload, CardStack};
pub use config::{ConfigError, SwipeConfig};
pub use mobile::{DeckEvent, SwipeDeck, SwipeDirection, SwipeOutcome};
