//! Touch-first card screens
//!
//! - `touch`: swipe gesture state machine for the top card
//! - `deck`: card stack controller driving the engine
//! - `ui`: header and bottom navigation chrome

pub mod deck;
pub mod touch;
pub mod ui;

pub use deck::{DeckEvent, SwipeDeck, SwipeOutcome};
pub use touch::{Offset, Point, SwipeDirection, SwipeEngine, SwipeState, Transform};
