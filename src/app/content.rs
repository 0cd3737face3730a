//! Content-area rendering for `CardsApp`.
//!
//! - `draw_content`: stack or empty state, plus the deck switcher
//! - `draw_stack`  : pointer wiring and back-to-front card painting

use std::time::Instant;

use eframe::egui;

use swipe_cards::mobile::touch::{Offset, Point, SwipeDirection, SwipeState, Transform};
use swipe_cards::render::layout::{card_contains, stack_layout, CARD_HEIGHT, CARD_WIDTH};
use swipe_cards::render::Screen;

use super::faces::{paint_badge, paint_card};
use super::CardsApp;

/// Cards drawn at once, top included
const MAX_VISIBLE: usize = 3;

fn to_point(p: egui::Pos2) -> Point {
    Point::new(p.x, p.y)
}

impl CardsApp {
    pub fn draw_content(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{} swiped", self.history.len()))
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let other = match self.screen {
                    Screen::Payments => Screen::Profiles,
                    Screen::Profiles => Screen::Payments,
                };
                if ui.small_button(format!("Switch to {}", other.title())).clicked() {
                    if let Err(e) = self.mount(other) {
                        log::error!("cannot mount {:?}: {}", other, e);
                    }
                }
            });
        });

        if self.deck.stack().is_exhausted() {
            self.draw_empty(ui);
        } else {
            self.draw_stack(ui, now);
        }
    }

    fn draw_empty(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.label(
                egui::RichText::new("No more cards")
                    .size(20.0)
                    .color(egui::Color32::GRAY),
            );
            ui.add_space(12.0);
            if ui.button("Start over").clicked() {
                self.start_over();
            }
        });
    }

    fn draw_stack(&mut self, ui: &mut egui::Ui, now: Instant) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());
        let center = to_point(rect.center());

        // Pointer → deck
        if response.drag_started() {
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(pos) = origin.map(to_point) {
                let live = self.deck.transform();
                if card_contains(center, CARD_WIDTH, CARD_HEIGHT, &live, pos) {
                    self.deck.pointer_down(pos);
                }
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(event) = self.deck.pointer_move(to_point(pos)) {
                    self.handle(event, now);
                }
            }
        }
        if response.drag_stopped() {
            if let Some(event) = self.deck.pointer_up(now) {
                self.handle(event, now);
            }
        }

        // Cards, back to front
        let painter = ui.painter_at(rect);
        let top_transform = self.animator.frame(now, self.deck.transform());
        let placements = stack_layout(self.deck.stack().remaining(), MAX_VISIBLE);
        for placement in placements {
            let Some(card) = self
                .deck
                .stack()
                .remaining()
                .get(placement.depth)
            else {
                continue;
            };
            let transform = if placement.depth == 0 {
                top_transform
            } else {
                Transform {
                    translation: Offset::new(placement.offset_x, placement.offset_y),
                    rotation_deg: 0.0,
                }
            };
            paint_card(
                &painter,
                center,
                &transform,
                placement.scale,
                placement.opacity,
                &card.payload,
            );
        }

        // Like / nope hint once a release would commit
        if let SwipeState::Dragging(drag) = self.deck.engine().state() {
            if drag.committed {
                if let Some(direction) = SwipeDirection::from_dx(drag.delta.dx) {
                    let guarded = self.deck.config().last_card_guard && self.deck.stack().is_last();
                    if !guarded {
                        paint_badge(&painter, center, &top_transform, direction);
                    }
                }
            }
        }
    }
}
