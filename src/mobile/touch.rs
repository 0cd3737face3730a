//! Swipe Gesture Recognition
//!
//! Turns one pointer drag on the top card into a swipe decision:
//! - Drag: the card follows the pointer and tilts with horizontal distance
//! - Release past the commit threshold: card is thrown off-screen, and once
//!   the exit animation has run its full duration the engine reports the
//!   direction so the stack can advance
//! - Release short of the threshold: card springs back, nothing changes
//!
//! States: `Idle → Dragging → Settling → Idle`. Only one gesture is ever in
//! flight; input that arrives in the wrong state is dropped.

use std::time::Instant;

use crate::config::SwipeConfig;
use crate::sched::{Scheduler, TaskId};

/// Pointer position in screen units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Offset {
        Offset {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

/// Displacement from the drag origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// What the render layer applies to the top card this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub translation: Offset,
    /// Clockwise tilt in degrees
    pub rotation_deg: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Offset::ZERO,
        rotation_deg: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Live transform for a drag delta. Pure: depends on nothing but its inputs.
///
/// Rotation is linear in `dx`, so it is zero at rest and always tilts toward
/// the side the card is being pulled to.
pub fn live_transform(delta: Offset, rotation_divisor: f32) -> Transform {
    Transform {
        translation: delta,
        rotation_deg: delta.dx / rotation_divisor,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Nope / dismiss
    Left,
    /// Like / advance
    Right,
}

impl SwipeDirection {
    /// Direction of a horizontal displacement; `None` at exactly zero.
    pub fn from_dx(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Self::Right)
        } else if dx < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Pointer held on the current card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub origin: Point,
    pub delta: Offset,
    /// Whether releasing right now would commit (ignoring the last-card guard)
    pub committed: bool,
}

/// Exit animation in progress after a commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settling {
    pub direction: SwipeDirection,
    /// Card displacement at the moment of release
    pub release: Offset,
    pub started: Instant,
    pub task: TaskId,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SwipeState {
    #[default]
    Idle,
    Dragging(DragState),
    Settling(Settling),
}

/// How a drag ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Card goes back. `suppressed` means it was far enough to commit but the
    /// caller did not allow it.
    Cancelled { delta: Offset, suppressed: bool },
    /// Exit animation started; completion arrives through [`SwipeEngine::poll`].
    Committed {
        direction: SwipeDirection,
        delta: Offset,
    },
}

/// Swipe state machine for the top card of one stack.
#[derive(Debug)]
pub struct SwipeEngine {
    config: SwipeConfig,
    state: SwipeState,
    /// Exit completions. Holds at most one task.
    timers: Scheduler<SwipeDirection>,
}

impl SwipeEngine {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            state: SwipeState::Idle,
            timers: Scheduler::new(),
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn state(&self) -> &SwipeState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SwipeState::Idle)
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.state, SwipeState::Settling(_))
    }

    /// Start a drag. Rejected unless idle.
    pub fn pointer_down(&mut self, at: Point) -> bool {
        if !self.is_idle() {
            log::trace!("pointer down ignored in {:?}", self.state);
            return false;
        }
        self.state = SwipeState::Dragging(DragState {
            origin: at,
            delta: Offset::ZERO,
            committed: false,
        });
        log::debug!("drag start at ({:.1}, {:.1})", at.x, at.y);
        true
    }

    /// Track the pointer. Returns the new live transform while dragging.
    pub fn pointer_move(&mut self, at: Point) -> Option<Transform> {
        let threshold = self.config.commit_threshold;
        let SwipeState::Dragging(drag) = &mut self.state else {
            return None;
        };
        drag.delta = at.offset_from(drag.origin);
        drag.committed = drag.delta.dx.abs() > threshold;
        log::trace!("drag delta ({:.1}, {:.1})", drag.delta.dx, drag.delta.dy);
        Some(live_transform(drag.delta, self.config.rotation_divisor))
    }

    /// Finish the drag and classify it.
    ///
    /// `allow_commit` is the owner's veto (the last-card guard). Returns
    /// `None` when no drag was active, so a second release is a no-op.
    pub fn pointer_up(&mut self, now: Instant, allow_commit: bool) -> Option<Release> {
        let SwipeState::Dragging(drag) = self.state else {
            return None;
        };
        let delta = drag.delta;

        let direction = SwipeDirection::from_dx(delta.dx).filter(|_| drag.committed);
        match direction {
            Some(direction) if allow_commit => {
                let task = self
                    .timers
                    .schedule(now, self.config.exit_duration, direction);
                self.state = SwipeState::Settling(Settling {
                    direction,
                    release: delta,
                    started: now,
                    task,
                });
                log::debug!("commit {:?} at dx={:.1}", direction, delta.dx);
                Some(Release::Committed { direction, delta })
            }
            over => {
                self.state = SwipeState::Idle;
                let suppressed = over.is_some();
                log::debug!("cancel at dx={:.1} (suppressed: {})", delta.dx, suppressed);
                Some(Release::Cancelled { delta, suppressed })
            }
        }
    }

    /// Fire the exit completion if its time has come. Returns the committed
    /// direction exactly once per committed gesture.
    pub fn poll(&mut self, now: Instant) -> Option<SwipeDirection> {
        if !self.is_settling() {
            return None;
        }
        let direction = self.timers.poll(now).into_iter().next()?;
        self.state = SwipeState::Idle;
        Some(direction)
    }

    /// Abandon whatever is in flight. A pending exit completion will never fire.
    pub fn cancel(&mut self) -> bool {
        let dropped = self.timers.cancel_all();
        let was_active = !self.is_idle();
        self.state = SwipeState::Idle;
        if dropped > 0 {
            log::debug!("cancelled {} pending exit completion(s)", dropped);
        }
        was_active || dropped > 0
    }

    /// Authoritative transform for the top card.
    ///
    /// Idle is identity. While settling this is the exit target; easing toward
    /// it is the render layer's business.
    pub fn transform(&self) -> Transform {
        match &self.state {
            SwipeState::Idle => Transform::IDENTITY,
            SwipeState::Dragging(drag) => live_transform(drag.delta, self.config.rotation_divisor),
            SwipeState::Settling(s) => self.exit_target(s.direction, s.release),
        }
    }

    /// Where a committed card ends up.
    pub fn exit_target(&self, direction: SwipeDirection, release: Offset) -> Transform {
        let delta = Offset::new(direction.sign() * self.config.exit_distance, release.dy);
        live_transform(delta, self.config.rotation_divisor)
    }

    /// Fraction of the exit animation elapsed, `0.0..=1.0`, while settling.
    pub fn settle_progress(&self, now: Instant) -> Option<f32> {
        let SwipeState::Settling(s) = &self.state else {
            return None;
        };
        let elapsed = now.saturating_duration_since(s.started).as_secs_f32();
        Some((elapsed / self.config.exit_duration.as_secs_f32()).clamp(0.0, 1.0))
    }
}
