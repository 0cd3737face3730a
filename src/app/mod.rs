//! `CardsApp`, the top-level egui application state.
//!
//! This module declares the `CardsApp` struct, screen mounting, and the
//! `eframe::App` frame loop. Drawing is split across sibling sub-modules:
//!
//! - `content`: card stack, pointer wiring, empty state
//! - `faces`  : per-payload card painting

pub mod content;
pub mod faces;

use std::time::{Duration, Instant};

use eframe::egui;

use swipe_cards::mobile::ui::{ChromeAction, MobileChrome, HEADER_HEIGHT, NAV_HEIGHT};
use swipe_cards::render::animator::CardAnimator;
use swipe_cards::render::Screen;
use swipe_cards::{ConfigError, DeckEvent, SwipeConfig, SwipeDeck, SwipeOutcome};

/// Command-line tweaks layered over a screen's preset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub threshold: Option<f32>,
    pub rotation_divisor: Option<f32>,
    pub exit_ms: Option<u64>,
    pub last_card_guard: Option<bool>,
}

impl Overrides {
    pub fn apply(&self, mut config: SwipeConfig) -> SwipeConfig {
        if let Some(t) = self.threshold {
            config = config.with_threshold(t);
        }
        if let Some(d) = self.rotation_divisor {
            config = config.with_rotation_divisor(d);
        }
        if let Some(ms) = self.exit_ms {
            config = config.with_exit_duration(Duration::from_millis(ms));
        }
        if let Some(guard) = self.last_card_guard {
            config = config.with_last_card_guard(guard);
        }
        config
    }
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct CardsApp {
    pub screen: Screen,
    pub overrides: Overrides,
    pub deck: SwipeDeck,
    pub animator: CardAnimator,
    pub chrome: MobileChrome,
    /// Outcomes of this session, newest last. Not persisted.
    pub history: Vec<SwipeOutcome>,
}

impl CardsApp {
    pub fn new(screen: Screen, overrides: Overrides) -> Result<Self, ConfigError> {
        let config = overrides.apply(screen.config());
        let deck = SwipeDeck::new(config, screen.cards())?;
        Ok(Self {
            screen,
            overrides,
            animator: CardAnimator::new(deck.config()),
            deck,
            chrome: MobileChrome::new(screen.title(), 400.0, 780.0),
            history: Vec::new(),
        })
    }

    /// Unmount the current deck and mount `screen` in its place.
    pub fn mount(&mut self, screen: Screen) -> Result<(), ConfigError> {
        let config = self.overrides.apply(screen.config());
        let deck = SwipeDeck::new(config, screen.cards())?;
        self.deck.teardown();
        self.animator = CardAnimator::new(deck.config());
        self.deck = deck;
        self.screen = screen;
        self.chrome.title = screen.title().to_owned();
        self.history.clear();
        log::info!("mounted {:?} screen", screen);
        Ok(())
    }

    /// Deal the same screen's cards again.
    pub fn start_over(&mut self) {
        self.deck.reset(self.screen.cards());
        self.animator = CardAnimator::new(self.deck.config());
        self.history.clear();
    }

    pub fn handle(&mut self, event: DeckEvent, now: Instant) {
        self.animator.observe(&event, now);
        if let DeckEvent::Committed(outcome) = event {
            self.history.push(outcome);
        }
    }

    fn handle_chrome(&mut self, action: ChromeAction) {
        match action {
            ChromeAction::None => {}
            ChromeAction::Back | ChromeAction::Filter => {
                log::debug!("{:?} pressed", action);
            }
            ChromeAction::SelectTab(_) => self.chrome.apply(&action),
        }
    }
}

impl Drop for CardsApp {
    fn drop(&mut self) {
        self.deck.teardown();
    }
}

impl eframe::App for CardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        for event in self.deck.tick(now) {
            self.handle(event, now);
        }

        ctx.set_visuals(egui::Visuals::light());
        let screen = ctx.screen_rect();
        self.chrome.set_screen_size(screen.width(), screen.height());

        let header = egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .show(ctx, |ui| self.chrome.render_header(ui))
            .inner;
        self.handle_chrome(header);

        let nav = egui::TopBottomPanel::bottom("bottom_nav")
            .exact_height(NAV_HEIGHT)
            .show(ctx, |ui| self.chrome.render_bottom_nav(ui))
            .inner;
        self.handle_chrome(nav);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                self.draw_content(ui, now);
            });

        if self.deck.is_settling() || self.animator.is_animating(now) {
            ctx.request_repaint();
        }
    }
}
