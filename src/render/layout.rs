use crate::card::{Card, CardId};
use crate::mobile::touch::{Point, Transform};

/// Card size in screen units
pub const CARD_WIDTH: f32 = 320.0;
pub const CARD_HEIGHT: f32 = 450.0;

/// Per-depth offset of cards peeking out behind the top one
const DEPTH_OFFSET_X: f32 = 20.0;
const DEPTH_OFFSET_Y: f32 = 10.0;
/// Per-depth shrink
const DEPTH_SHRINK: f32 = 0.05;
const BACKGROUND_OPACITY: f32 = 0.7;

/// Where one card of the stack is drawn, before any drag transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub card: CardId,
    /// 0 is the top card
    pub depth: usize,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Lay out the remaining cards, back to front.
///
/// The top card sits at the origin; each card under it is nudged right and
/// down and shrunk a little so the stack reads as a pile. At most
/// `max_visible` cards are returned.
pub fn stack_layout(remaining: &[Card], max_visible: usize) -> Vec<CardPlacement> {
    let mut placements: Vec<CardPlacement> = remaining
        .iter()
        .take(max_visible)
        .enumerate()
        .map(|(depth, card)| {
            let d = depth as f32;
            CardPlacement {
                card: card.id,
                depth,
                offset_x: d * DEPTH_OFFSET_X,
                offset_y: d * DEPTH_OFFSET_Y,
                scale: (1.0 - d * DEPTH_SHRINK).max(0.0),
                opacity: if depth == 0 { 1.0 } else { BACKGROUND_OPACITY },
            }
        })
        .collect();
    placements.reverse();
    placements
}

/// Corners of a `width × height` card centered on `center`, after applying
/// `transform` (translate, then rotate about the card's own center).
/// Order: top-left, top-right, bottom-right, bottom-left.
pub fn card_corners(center: Point, width: f32, height: f32, transform: &Transform) -> [Point; 4] {
    let cx = center.x + transform.translation.dx;
    let cy = center.y + transform.translation.dy;
    let (sin, cos) = transform.rotation_deg.to_radians().sin_cos();
    let hw = width * 0.5;
    let hh = height * 0.5;

    [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(x, y)| {
        Point::new(cx + x * cos - y * sin, cy + x * sin + y * cos)
    })
}

/// Whether `p` lands on the transformed card.
pub fn card_contains(center: Point, width: f32, height: f32, transform: &Transform, p: Point) -> bool {
    let cx = center.x + transform.translation.dx;
    let cy = center.y + transform.translation.dy;
    // Undo the rotation and test against the axis-aligned box.
    let (sin, cos) = (-transform.rotation_deg.to_radians()).sin_cos();
    let dx = p.x - cx;
    let dy = p.y - cy;
    let lx = dx * cos - dy * sin;
    let ly = dx * sin + dy * cos;
    lx.abs() <= width * 0.5 && ly.abs() <= height * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::payment_cards;
    use crate::mobile::touch::Offset;

    #[test]
    fn test_stack_layout_back_to_front() {
        let cards = payment_cards();
        let layout = stack_layout(&cards, 3);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout[0].depth, 1);
        assert_eq!(layout[1].depth, 0);

        let top = layout[1];
        assert_eq!(top.card, CardId(0));
        assert!((top.scale - 1.0).abs() < 1e-6);
        assert!((top.opacity - 1.0).abs() < 1e-6);

        let under = layout[0];
        assert!((under.offset_x - 20.0).abs() < 1e-6);
        assert!((under.offset_y - 10.0).abs() < 1e-6);
        assert!((under.scale - 0.95).abs() < 1e-6);
        assert!((under.opacity - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_stack_layout_caps_visible() {
        let cards = crate::card::profile_cards();
        assert_eq!(stack_layout(&cards, 2).len(), 2);
        assert!(stack_layout(&[], 3).is_empty());
    }

    #[test]
    fn test_corners_without_transform() {
        let c = card_corners(Point::new(0.0, 0.0), 4.0, 2.0, &Transform::IDENTITY);
        assert_eq!(c[0], Point::new(-2.0, -1.0));
        assert_eq!(c[2], Point::new(2.0, 1.0));
    }

    #[test]
    fn test_corners_rotated_quarter_turn() {
        let t = Transform {
            translation: Offset::new(10.0, 0.0),
            rotation_deg: 90.0,
        };
        let c = card_corners(Point::new(0.0, 0.0), 4.0, 2.0, &t);
        // top-left (-2, -1) rotates to (1, -2), then shifts right by 10
        assert!((c[0].x - 11.0).abs() < 1e-4);
        assert!((c[0].y + 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_hit_test_follows_transform() {
        let center = Point::new(200.0, 300.0);
        let moved = Transform {
            translation: Offset::new(300.0, 0.0),
            rotation_deg: 0.0,
        };
        assert!(card_contains(center, CARD_WIDTH, CARD_HEIGHT, &Transform::IDENTITY, center));
        assert!(!card_contains(center, CARD_WIDTH, CARD_HEIGHT, &moved, center));
        assert!(card_contains(center, CARD_WIDTH, CARD_HEIGHT, &moved, Point::new(500.0, 300.0)));
    }
}
