//! Whole-screen swipe scenarios driven through the public API.

use std::time::{Duration, Instant};

use swipe_cards::card::{payment_cards, profile_cards};
use swipe_cards::mobile::touch::Point;
use swipe_cards::render::animator::CardAnimator;
use swipe_cards::{Card, CardId, CardPayload, DeckEvent, SwipeConfig, SwipeDeck, SwipeDirection, SwipeOutcome};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn named(ids: &[&str]) -> Vec<Card> {
    ids.iter()
        .enumerate()
        .map(|(i, name)| {
            Card::new(
                i as u32,
                CardPayload::Profile {
                    name: name.to_string(),
                    subtitle: String::new(),
                },
            )
        })
        .collect()
}

/// Press, drag horizontally in a few steps, release.
fn swipe(deck: &mut SwipeDeck, dx: f32, now: Instant) -> Option<DeckEvent> {
    let start = Point::new(180.0, 300.0);
    deck.pointer_down(start);
    for step in 1..=4 {
        let f = step as f32 / 4.0;
        deck.pointer_move(Point::new(start.x + dx * f, start.y + 3.0 * f));
    }
    deck.pointer_up(now)
}

#[test]
fn short_drag_snaps_back_and_keeps_card() {
    let t0 = Instant::now();
    let mut deck = SwipeDeck::new(SwipeConfig::profiles(), named(&["A", "B"])).unwrap();
    match swipe(&mut deck, 120.0, t0) {
        Some(DeckEvent::Cancelled { outcome, suppressed, .. }) => {
            assert_eq!(outcome, SwipeOutcome::Cancelled(CardId(0)));
            assert!(!suppressed);
        }
        other => panic!("Expected Cancelled, got {:?}", other),
    }
    assert!(deck.engine().is_idle());
    assert!(deck.transform().is_identity());
    assert!(deck.tick(t0 + Duration::from_secs(1)).is_empty());
    assert_eq!(deck.current().map(|c| c.id), Some(CardId(0)));
}

#[test]
fn guarded_last_card_never_leaves() {
    let t0 = Instant::now();
    let config = SwipeConfig::payments().with_threshold(100.0).with_last_card_guard(true);
    let mut deck = SwipeDeck::new(config, named(&["A"])).unwrap();

    let event = swipe(&mut deck, 150.0, t0);
    assert!(matches!(event, Some(DeckEvent::Cancelled { suppressed: true, .. })));
    assert!(deck.tick(t0 + ms(300)).is_empty());
    assert!(deck.tick(t0 + Duration::from_secs(10)).is_empty());
    assert_eq!(deck.current().map(|c| c.id), Some(CardId(0)));
    assert!(deck.transform().is_identity());
}

#[test]
fn unguarded_last_card_commits_right_then_empties() {
    let t0 = Instant::now();
    let config = SwipeConfig::payments().with_last_card_guard(false);
    let mut deck = SwipeDeck::new(config, named(&["A"])).unwrap();

    assert!(matches!(
        swipe(&mut deck, 150.0, t0),
        Some(DeckEvent::ExitStarted { card: CardId(0), direction: SwipeDirection::Right, .. })
    ));
    assert!(deck.tick(t0 + ms(299)).is_empty());
    let events = deck.tick(t0 + ms(300));
    assert_eq!(
        events,
        vec![
            DeckEvent::Committed(SwipeOutcome::CommittedRight(CardId(0))),
            DeckEvent::Exhausted
        ]
    );
    assert!(deck.stack().is_exhausted());
    assert!(deck.current().is_none());
}

#[test]
fn multi_card_left_swipe_rejects_input_while_settling() {
    let t0 = Instant::now();
    let config = SwipeConfig::profiles().with_threshold(120.0);
    let mut deck = SwipeDeck::new(config, named(&["A", "B", "C"])).unwrap();

    assert!(matches!(
        swipe(&mut deck, -200.0, t0),
        Some(DeckEvent::ExitStarted { direction: SwipeDirection::Left, .. })
    ));

    // A is still flying off: a new drag is refused and moves do nothing
    assert!(deck.is_settling());
    assert!(!deck.pointer_down(Point::new(100.0, 100.0)));
    assert_eq!(deck.pointer_move(Point::new(400.0, 100.0)), None);
    assert_eq!(deck.pointer_up(t0 + ms(10)), None);

    let events = deck.tick(t0 + ms(300));
    assert_eq!(events, vec![DeckEvent::Committed(SwipeOutcome::CommittedLeft(CardId(0)))]);
    assert_eq!(deck.current().map(|c| c.id), Some(CardId(1)));

    // B is now interactable
    assert!(deck.pointer_down(Point::new(100.0, 100.0)));
}

#[test]
fn double_release_resolves_once() {
    let t0 = Instant::now();
    let mut deck = SwipeDeck::new(SwipeConfig::profiles(), named(&["A", "B"])).unwrap();
    assert!(swipe(&mut deck, 300.0, t0).is_some());
    assert_eq!(deck.pointer_up(t0), None);

    let mut commits = 0;
    for step in 0..20 {
        commits += deck
            .tick(t0 + ms(step * 50))
            .iter()
            .filter(|e| matches!(e, DeckEvent::Committed(_)))
            .count();
    }
    assert_eq!(commits, 1);
    assert_eq!(deck.stack().current_index(), 1);
}

#[test]
fn teardown_mid_exit_suppresses_commit() {
    let t0 = Instant::now();
    let mut deck = SwipeDeck::new(SwipeConfig::profiles(), profile_cards()).unwrap();
    swipe(&mut deck, 250.0, t0);
    assert!(deck.tick(t0 + ms(150)).is_empty());

    deck.teardown();
    assert!(deck.is_torn_down());
    assert!(deck.tick(t0 + ms(300)).is_empty());
    assert!(deck.tick(t0 + Duration::from_secs(5)).is_empty());
    assert_eq!(deck.stack().current_index(), 0);
}

#[test]
fn payments_screen_walks_to_split_card_and_stops() {
    let t0 = Instant::now();
    let mut deck = SwipeDeck::new(SwipeConfig::payments(), payment_cards()).unwrap();

    swipe(&mut deck, -130.0, t0);
    deck.tick(t0 + ms(300));
    assert!(matches!(
        deck.current().map(|c| &c.payload),
        Some(CardPayload::Split { .. })
    ));

    // Split card is last and guarded
    let t1 = t0 + Duration::from_secs(1);
    assert!(matches!(
        swipe(&mut deck, -130.0, t1),
        Some(DeckEvent::Cancelled { suppressed: true, .. })
    ));
    assert!(deck.tick(t1 + Duration::from_secs(1)).is_empty());
    assert!(!deck.stack().is_exhausted());
}

#[test]
fn animator_tracks_a_full_commit() {
    let t0 = Instant::now();
    let mut deck = SwipeDeck::new(SwipeConfig::profiles(), named(&["A", "B"])).unwrap();
    let mut anim = CardAnimator::new(deck.config());

    deck.pointer_down(Point::new(0.0, 0.0));
    let moved = deck.pointer_move(Point::new(180.0, 0.0)).unwrap();
    anim.observe(&moved, t0);
    let dragging = anim.frame(t0, deck.transform());
    assert!((dragging.rotation_deg - 12.0).abs() < 1e-4); // 180 / 15

    let exit = deck.pointer_up(t0).unwrap();
    anim.observe(&exit, t0);
    let end = anim.frame(t0 + ms(300), deck.transform());
    assert!((end.translation.dx - 1000.0).abs() < 1e-3);

    for event in deck.tick(t0 + ms(300)) {
        anim.observe(&event, t0 + ms(300));
    }
    assert!(anim.frame(t0 + ms(301), deck.transform()).is_identity());
}
