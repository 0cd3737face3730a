//! Card face painting.
//!
//! Every card is painted in its own local frame (origin at the card center,
//! unscaled units) and then pushed through the card's transform, so rotated
//! and shrunken cards keep their contents attached.

use eframe::egui;
use egui::epaint::TextShape;

use swipe_cards::mobile::touch::{Offset, Point, SwipeDirection, Transform};
use swipe_cards::render::layout::{card_corners, CARD_HEIGHT, CARD_WIDTH};
use swipe_cards::CardPayload;

const RECEIPT_TEAL: egui::Color32 = egui::Color32::from_rgb(0x02, 0xA4, 0x96);
const SPLIT_TEAL: egui::Color32 = egui::Color32::from_rgb(0x17, 0xA2, 0xB8);
const PROFILE_BG: [egui::Color32; 4] = [
    egui::Color32::from_rgb(0x5C, 0x6B, 0xC0),
    egui::Color32::from_rgb(0xEF, 0x6C, 0x00),
    egui::Color32::from_rgb(0x2E, 0x7D, 0x32),
    egui::Color32::from_rgb(0xAD, 0x14, 0x57),
];

/// A card's local frame placed on screen.
struct CardFrame<'a> {
    painter: &'a egui::Painter,
    center: Point,
    transform: &'a Transform,
    scale: f32,
    opacity: f32,
}

impl CardFrame<'_> {
    fn angle(&self) -> f32 {
        self.transform.rotation_deg.to_radians()
    }

    /// Local card coordinates → screen.
    fn to_screen(&self, x: f32, y: f32) -> egui::Pos2 {
        let (sin, cos) = self.angle().sin_cos();
        let (x, y) = (x * self.scale, y * self.scale);
        egui::pos2(
            self.center.x + self.transform.translation.dx + x * cos - y * sin,
            self.center.y + self.transform.translation.dy + x * sin + y * cos,
        )
    }

    fn fade(&self, color: egui::Color32) -> egui::Color32 {
        color.gamma_multiply(self.opacity)
    }

    fn rect(&self, x: f32, y: f32, w: f32, h: f32, fill: egui::Color32) {
        // Rotate the rect's own center with the card, then orient it the same way.
        let c = self.to_screen(x, y);
        let corners = card_corners(
            Point::new(c.x, c.y),
            w * self.scale,
            h * self.scale,
            &Transform {
                translation: Offset::ZERO,
                rotation_deg: self.transform.rotation_deg,
            },
        );
        let points = corners.iter().map(|p| egui::pos2(p.x, p.y)).collect();
        self.painter
            .add(egui::Shape::convex_polygon(points, self.fade(fill), egui::Stroke::NONE));
    }

    fn circle(&self, x: f32, y: f32, r: f32, fill: egui::Color32) {
        self.painter
            .circle_filled(self.to_screen(x, y), r * self.scale, self.fade(fill));
    }

    /// Text centered on local `(x, y)`.
    fn text(&self, x: f32, y: f32, text: &str, size: f32, color: egui::Color32) {
        let color = self.fade(color);
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            egui::FontId::proportional(size * self.scale),
            color,
        );
        let half = galley.size() * 0.5;
        let (sin, cos) = self.angle().sin_cos();
        let anchor = self.to_screen(x, y);
        // TextShape rotates around its top-left corner.
        let pos = egui::pos2(
            anchor.x - (half.x * cos - half.y * sin),
            anchor.y - (half.x * sin + half.y * cos),
        );
        self.painter
            .add(TextShape::new(pos, galley, color).with_angle(self.angle()));
    }
}

/// Paint one card of the stack.
pub fn paint_card(
    painter: &egui::Painter,
    center: Point,
    transform: &Transform,
    scale: f32,
    opacity: f32,
    payload: &CardPayload,
) {
    let frame = CardFrame {
        painter,
        center,
        transform,
        scale,
        opacity,
    };

    match payload {
        CardPayload::Receipt {
            title,
            timestamp,
            merchant,
            handle,
            amount,
            category,
        } => {
            frame.rect(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT, RECEIPT_TEAL);
            frame.text(0.0, -185.0, title, 22.0, egui::Color32::WHITE);
            frame.text(0.0, -158.0, timestamp, 14.0, egui::Color32::from_white_alpha(230));

            // Inner receipt panel
            frame.rect(0.0, 45.0, 290.0, 290.0, egui::Color32::WHITE);
            frame.circle(0.0, -60.0, 30.0, egui::Color32::from_rgb(200, 240, 200));
            frame.text(0.0, -60.0, "\u{2708}", 24.0, egui::Color32::DARK_GREEN);
            frame.text(0.0, -10.0, merchant, 18.0, egui::Color32::BLACK);
            frame.text(0.0, 14.0, handle, 12.0, egui::Color32::GRAY);
            frame.text(0.0, 60.0, amount, 32.0, egui::Color32::BLACK);
            frame.rect(0.0, 100.0, 250.0, 1.0, egui::Color32::from_gray(210));
            frame.text(-40.0, 140.0, category, 14.0, egui::Color32::BLACK);
            frame.text(100.0, 140.0, "Change", 12.0, egui::Color32::from_rgb(0, 128, 128));
        }
        CardPayload::Split { title } => {
            frame.rect(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT, SPLIT_TEAL);
            frame.circle(0.0, -40.0, 60.0, egui::Color32::WHITE);
            frame.text(0.0, -40.0, "\u{1F465}", 44.0, SPLIT_TEAL);
            frame.text(0.0, 70.0, title, 22.0, egui::Color32::WHITE);
        }
        CardPayload::Profile { name, subtitle } => {
            let bg = PROFILE_BG[name.len() % PROFILE_BG.len()];
            frame.rect(0.0, 0.0, CARD_WIDTH, CARD_HEIGHT, bg);
            frame.circle(0.0, -60.0, 80.0, egui::Color32::from_white_alpha(60));
            let initial: String = name.chars().take(1).collect();
            frame.text(0.0, -60.0, &initial, 64.0, egui::Color32::WHITE);
            frame.text(0.0, 130.0, name, 26.0, egui::Color32::WHITE);
            frame.text(0.0, 162.0, subtitle, 14.0, egui::Color32::from_white_alpha(220));
        }
    }
}

/// "LIKE" / "NOPE" stamp on the top card while a release would commit.
pub fn paint_badge(
    painter: &egui::Painter,
    center: Point,
    transform: &Transform,
    direction: SwipeDirection,
) {
    let frame = CardFrame {
        painter,
        center,
        transform,
        scale: 1.0,
        opacity: 1.0,
    };
    let (label, x, color) = match direction {
        SwipeDirection::Right => ("LIKE", -90.0, egui::Color32::from_rgb(46, 204, 113)),
        SwipeDirection::Left => ("NOPE", 90.0, egui::Color32::from_rgb(231, 76, 60)),
    };
    frame.text(x, -190.0, label, 30.0, color);
}
