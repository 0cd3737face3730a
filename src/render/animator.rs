/// Card motion animator.
///
/// The swipe engine only knows where a card *should* be: under the pointer,
/// at the exit target, or at rest. This module fills in the frames between:
/// - Follow: mirror the live drag transform
/// - Exit: ease-in from the release point to the off-screen target
/// - Snap-back: damped spring from the release point to rest

use std::time::{Duration, Instant};

use crate::mobile::deck::DeckEvent;
use crate::mobile::touch::{live_transform, Offset, Transform};

/// Spring damping ratio for snap-back
const SPRING_DAMPING: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Draw exactly what the engine says
    Follow,
    Exit {
        from: Offset,
        to: Offset,
        started: Instant,
        duration: Duration,
    },
    SnapBack {
        from: Offset,
        started: Instant,
        duration: Duration,
    },
}

/// Cosmetic transform for the top card, frame by frame.
#[derive(Debug, Clone)]
pub struct CardAnimator {
    motion: Motion,
    rotation_divisor: f32,
    exit_distance: f32,
    exit_duration: Duration,
    snap_back_duration: Duration,
}

impl CardAnimator {
    pub fn new(config: &crate::config::SwipeConfig) -> Self {
        Self {
            motion: Motion::Follow,
            rotation_divisor: config.rotation_divisor,
            exit_distance: config.exit_distance,
            exit_duration: config.exit_duration,
            snap_back_duration: config.snap_back_duration,
        }
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Feed a deck event observed at `now`.
    pub fn observe(&mut self, event: &DeckEvent, now: Instant) {
        match event {
            DeckEvent::Transform { .. } => self.motion = Motion::Follow,
            DeckEvent::ExitStarted { direction, from, .. } => {
                self.motion = Motion::Exit {
                    from: *from,
                    to: Offset::new(direction.sign() * self.exit_distance, from.dy),
                    started: now,
                    duration: self.exit_duration,
                };
            }
            DeckEvent::Cancelled { from, .. } => {
                self.motion = Motion::SnapBack {
                    from: *from,
                    started: now,
                    duration: self.snap_back_duration,
                };
            }
            // The next card starts at rest
            DeckEvent::Committed(_) | DeckEvent::Exhausted => self.motion = Motion::Follow,
        }
    }

    /// Whether frames still change without new input.
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.motion {
            Motion::Follow => false,
            Motion::Exit { started, duration, .. } | Motion::SnapBack { started, duration, .. } => {
                now.saturating_duration_since(started) < duration
            }
        }
    }

    /// Transform to draw this frame. `live` is the engine's current transform.
    pub fn frame(&mut self, now: Instant, live: Transform) -> Transform {
        let offset = match self.motion {
            Motion::Follow => return live,
            Motion::Exit { from, to, started, duration } => {
                let p = progress(now, started, duration);
                let e = ease_in(p);
                Offset::new(lerp(from.dx, to.dx, e), lerp(from.dy, to.dy, e))
            }
            Motion::SnapBack { from, started, duration } => {
                let p = progress(now, started, duration);
                if p >= 1.0 {
                    self.motion = Motion::Follow;
                    return live;
                }
                let k = spring(p);
                Offset::new(from.dx * k, from.dy * k)
            }
        };
        live_transform(offset, self.rotation_divisor)
    }
}

fn progress(now: Instant, started: Instant, duration: Duration) -> f32 {
    let elapsed = now.saturating_duration_since(started).as_secs_f32();
    (elapsed / duration.as_secs_f32().max(1e-3)).clamp(0.0, 1.0)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-in
fn ease_in(t: f32) -> f32 {
    t * t
}

/// Remaining displacement fraction of an underdamped spring released at rest,
/// tuned so one `p` unit covers roughly one natural period. Pinned to 0 at
/// `p = 1`.
fn spring(p: f32) -> f32 {
    if p >= 1.0 {
        return 0.0;
    }
    let omega = std::f32::consts::TAU;
    let zeta = SPRING_DAMPING;
    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
    let decay = (-zeta * omega * p).exp();
    decay * ((omega_d * p).cos() + (zeta * omega / omega_d) * (omega_d * p).sin())
}
