//! `SwipeDeck`, a card stack wired to a swipe engine.
//!
//! The deck owns the cards and decides when a commit is allowed (the
//! last-card guard). The engine owns the gesture. Everything the render layer
//! needs comes back as [`DeckEvent`]s.

use std::time::Instant;

use super::touch::{Offset, Point, Release, SwipeDirection, SwipeEngine, Transform};
use crate::card::{Card, CardId, CardStack};
use crate::config::{ConfigError, SwipeConfig};

/// Result of one finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Cancelled(CardId),
    CommittedLeft(CardId),
    CommittedRight(CardId),
}

impl SwipeOutcome {
    pub fn committed(card: CardId, direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Self::CommittedLeft(card),
            SwipeDirection::Right => Self::CommittedRight(card),
        }
    }

    pub fn card(&self) -> CardId {
        match *self {
            Self::Cancelled(id) | Self::CommittedLeft(id) | Self::CommittedRight(id) => id,
        }
    }

    pub fn direction(&self) -> Option<SwipeDirection> {
        match self {
            Self::Cancelled(_) => None,
            Self::CommittedLeft(_) => Some(SwipeDirection::Left),
            Self::CommittedRight(_) => Some(SwipeDirection::Right),
        }
    }
}

/// Things the screen should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckEvent {
    /// Top card moved under the pointer
    Transform { card: CardId, transform: Transform },
    /// Released without committing; card springs back from `from`
    Cancelled {
        outcome: SwipeOutcome,
        from: Offset,
        suppressed: bool,
    },
    /// Released past the threshold; exit animation runs from `from`
    ExitStarted {
        card: CardId,
        direction: SwipeDirection,
        from: Offset,
    },
    /// Exit animation finished and the stack moved on
    Committed(SwipeOutcome),
    /// Last card is gone
    Exhausted,
}

pub struct SwipeDeck {
    engine: SwipeEngine,
    stack: CardStack,
    /// Card under the pointer for the gesture in flight
    active: Option<CardId>,
    torn_down: bool,
}

impl SwipeDeck {
    pub fn new(config: SwipeConfig, cards: Vec<Card>) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "deck of {} card(s): threshold={} divisor={} guard={}",
            cards.len(),
            config.commit_threshold,
            config.rotation_divisor,
            config.last_card_guard
        );
        Ok(Self {
            engine: SwipeEngine::new(config),
            stack: CardStack::new(cards),
            active: None,
            torn_down: false,
        })
    }

    pub fn config(&self) -> &SwipeConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &SwipeEngine {
        &self.engine
    }

    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub fn current(&self) -> Option<&Card> {
        self.stack.current()
    }

    pub fn transform(&self) -> Transform {
        self.engine.transform()
    }

    pub fn is_settling(&self) -> bool {
        self.engine.is_settling()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Pointer pressed on the top card. Rejected when no card is left, when a
    /// gesture is already in flight, or after teardown.
    pub fn pointer_down(&mut self, at: Point) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(card) = self.stack.current().map(|c| c.id) else {
            return false;
        };
        if !self.engine.pointer_down(at) {
            return false;
        }
        self.active = Some(card);
        true
    }

    pub fn pointer_move(&mut self, at: Point) -> Option<DeckEvent> {
        if self.torn_down {
            return None;
        }
        let card = self.active?;
        let transform = self.engine.pointer_move(at)?;
        Some(DeckEvent::Transform { card, transform })
    }

    pub fn pointer_up(&mut self, now: Instant) -> Option<DeckEvent> {
        if self.torn_down {
            return None;
        }
        let card = self.active?;
        let allow_commit = !(self.config().last_card_guard && self.stack.is_last());
        let event = match self.engine.pointer_up(now, allow_commit)? {
            Release::Cancelled { delta, suppressed } => {
                self.active = None;
                if suppressed {
                    log::debug!("{} is the last card, snapping back", card);
                }
                DeckEvent::Cancelled {
                    outcome: SwipeOutcome::Cancelled(card),
                    from: delta,
                    suppressed,
                }
            }
            Release::Committed { direction, delta } => DeckEvent::ExitStarted {
                card,
                direction,
                from: delta,
            },
        };
        Some(event)
    }

    /// Advance time. Completes a pending exit once its duration has elapsed.
    pub fn tick(&mut self, now: Instant) -> Vec<DeckEvent> {
        let mut events = Vec::new();
        if self.torn_down {
            return events;
        }
        let Some(direction) = self.engine.poll(now) else {
            return events;
        };
        self.active = None;
        if let Some(card) = self.stack.advance() {
            let outcome = SwipeOutcome::committed(card, direction);
            log::info!("{} swiped {:?}", card, direction);
            events.push(DeckEvent::Committed(outcome));
            if self.stack.is_exhausted() {
                log::info!("deck exhausted");
                events.push(DeckEvent::Exhausted);
            }
        }
        events
    }

    /// Fraction of the exit animation elapsed while settling.
    pub fn settle_progress(&self, now: Instant) -> Option<f32> {
        self.engine.settle_progress(now)
    }

    /// Screen is going away. Any pending exit completion is dropped and all
    /// further input is ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.engine.cancel();
        self.active = None;
        self.torn_down = true;
        log::debug!("deck torn down at card {}", self.stack.current_index());
    }

    /// Remount with a fresh set of cards.
    pub fn reset(&mut self, cards: Vec<Card>) {
        self.engine.cancel();
        self.stack = CardStack::new(cards);
        self.active = None;
        self.torn_down = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardPayload;
    use std::time::Duration;

    fn cards(n: u32) -> Vec<Card> {
        (0..n)
            .map(|i| {
                Card::new(
                    i,
                    CardPayload::Split {
                        title: format!("card {}", i),
                    },
                )
            })
            .collect()
    }

    fn swipe(deck: &mut SwipeDeck, dx: f32, now: Instant) -> Option<DeckEvent> {
        deck.pointer_down(Point::new(160.0, 225.0));
        deck.pointer_move(Point::new(160.0 + dx, 225.0));
        deck.pointer_up(now)
    }

    #[test]
    fn test_move_reports_card_and_transform() {
        let mut deck = SwipeDeck::new(SwipeConfig::profiles(), cards(2)).unwrap();
        deck.pointer_down(Point::new(0.0, 0.0));
        match deck.pointer_move(Point::new(30.0, 0.0)) {
            Some(DeckEvent::Transform { card, transform }) => {
                assert_eq!(card, CardId(0));
                assert!((transform.rotation_deg - 2.0).abs() < 1e-6); // 30 / 15
            }
            other => panic!("Expected Transform, got {:?}", other),
        }
    }

    #[test]
    fn test_commit_advances_after_duration() {
        let t0 = Instant::now();
        let mut deck = SwipeDeck::new(SwipeConfig::payments(), cards(3)).unwrap();
        assert!(matches!(
            swipe(&mut deck, 140.0, t0),
            Some(DeckEvent::ExitStarted { direction: SwipeDirection::Right, .. })
        ));
        assert!(deck.tick(t0 + Duration::from_millis(100)).is_empty());
        assert_eq!(deck.current().map(|c| c.id), Some(CardId(0)));

        let events = deck.tick(t0 + Duration::from_millis(300));
        assert_eq!(events, vec![DeckEvent::Committed(SwipeOutcome::CommittedRight(CardId(0)))]);
        assert_eq!(deck.current().map(|c| c.id), Some(CardId(1)));
        assert!(deck.transform().is_identity());
    }

    #[test]
    fn test_guard_keeps_last_card() {
        let t0 = Instant::now();
        let mut deck = SwipeDeck::new(SwipeConfig::payments(), cards(1)).unwrap();
        match swipe(&mut deck, 150.0, t0) {
            Some(DeckEvent::Cancelled { outcome, suppressed, .. }) => {
                assert_eq!(outcome, SwipeOutcome::Cancelled(CardId(0)));
                assert!(suppressed);
            }
            other => panic!("Expected Cancelled, got {:?}", other),
        }
        assert!(deck.tick(t0 + Duration::from_secs(1)).is_empty());
        assert_eq!(deck.current().map(|c| c.id), Some(CardId(0)));
        assert!(deck.transform().is_identity());
    }

    #[test]
    fn test_unguarded_last_card_empties_stack() {
        let t0 = Instant::now();
        let config = SwipeConfig::payments().with_last_card_guard(false);
        let mut deck = SwipeDeck::new(config, cards(1)).unwrap();
        swipe(&mut deck, 150.0, t0);
        let events = deck.tick(t0 + Duration::from_millis(300));
        assert_eq!(
            events,
            vec![
                DeckEvent::Committed(SwipeOutcome::CommittedRight(CardId(0))),
                DeckEvent::Exhausted,
            ]
        );
        assert!(deck.stack().is_exhausted());
        assert!(!deck.pointer_down(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_teardown_drops_pending_commit() {
        let t0 = Instant::now();
        let mut deck = SwipeDeck::new(SwipeConfig::profiles(), cards(2)).unwrap();
        swipe(&mut deck, -200.0, t0);
        assert!(deck.is_settling());
        deck.teardown();
        assert!(deck.tick(t0 + Duration::from_secs(2)).is_empty());
        assert_eq!(deck.stack().current_index(), 0);
        assert!(!deck.pointer_down(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_reset_remounts() {
        let t0 = Instant::now();
        let config = SwipeConfig::profiles();
        let mut deck = SwipeDeck::new(config, cards(1)).unwrap();
        swipe(&mut deck, 200.0, t0);
        deck.tick(t0 + Duration::from_millis(300));
        assert!(deck.stack().is_exhausted());

        deck.reset(cards(2));
        assert_eq!(deck.stack().remaining().len(), 2);
        assert!(deck.pointer_down(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SwipeConfig::profiles().with_rotation_divisor(0.0);
        assert!(matches!(
            SwipeDeck::new(config, cards(1)),
            Err(ConfigError::RotationDivisor(_))
        ));
    }

    #[test]
    fn test_outcome_accessors() {
        let o = SwipeOutcome::committed(CardId(4), SwipeDirection::Left);
        assert_eq!(o, SwipeOutcome::CommittedLeft(CardId(4)));
        assert_eq!(o.card(), CardId(4));
        assert_eq!(o.direction(), Some(SwipeDirection::Left));
        assert_eq!(SwipeOutcome::Cancelled(CardId(1)).direction(), None);
    }
}
