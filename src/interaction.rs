//! Tap detection and the frame-mode cycle.
//!
//! The pointer protocol is two events with no payload beyond a timestamp:
//! [`TouchTracker::touch_start`] and [`TouchTracker::touch_end`]. A release
//! within the tap threshold is a tap and steps the carrier frame to the next
//! [`FrameMode`]; a longer press is a hold and changes nothing. Timestamps
//! are caller-supplied [`Duration`]s from any monotonic clock the host has,
//! which keeps this module clock-free and deterministic under test.

use crate::kinematics::{FrameMode, KinematicState};
use log::debug;
use std::time::Duration;

/// Default press duration below which a release counts as a tap.
pub const DEFAULT_TAP_THRESHOLD: Duration = Duration::from_millis(500);

/// What a completed press turned out to be.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gesture {
    /// Released within the threshold; the frame mode advanced.
    Tap,
    /// Held past the threshold; deliberately inert.
    Hold,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TouchPhase {
    Idle,
    Pressed { since: Duration },
}

/// Classifies presses into taps and holds and applies taps to the train.
///
/// Exactly one field of the kinematic state is ever written here:
/// `frame_ratio`. Angles keep accumulating untouched through every gesture,
/// so a mode change never makes the picture jump.
#[derive(Clone, Debug)]
pub struct TouchTracker {
    phase: TouchPhase,
    tap_threshold: Duration,
}

impl Default for TouchTracker {
    fn default() -> Self {
        TouchTracker::new(DEFAULT_TAP_THRESHOLD)
    }
}

impl TouchTracker {
    /// A tracker with the given tap threshold. Release strictly before the
    /// threshold is a tap; at or past it, a hold.
    pub const fn new(tap_threshold: Duration) -> Self {
        TouchTracker {
            phase: TouchPhase::Idle,
            tap_threshold,
        }
    }

    /// Records a press at `at`. A second press before any release simply
    /// restarts the measurement.
    pub fn touch_start(&mut self, at: Duration) {
        self.phase = TouchPhase::Pressed { since: at };
    }

    /// Completes a press at `at`, mutating `state` if it was a tap.
    ///
    /// Returns `None` for a release with no matching press. A release that
    /// timestamps *before* its press (a clock hiccup) saturates to a zero
    /// hold and still counts as a tap. Taps step the frame mode along the
    /// [`FrameMode::next`] cycle; a `frame_ratio` outside the cycle heals to
    /// [`FrameMode::Orbit`] instead of panicking or sticking.
    pub fn touch_end(&mut self, at: Duration, state: &mut KinematicState) -> Option<Gesture> {
        let pressed = core::mem::replace(&mut self.phase, TouchPhase::Idle);
        let since = match pressed {
            TouchPhase::Pressed { since } => since,
            TouchPhase::Idle => return None,
        };
        let held = at.saturating_sub(since);
        if held >= self.tap_threshold {
            return Some(Gesture::Hold);
        }
        let mode = match state.frame_mode() {
            Some(mode) => mode.next(),
            None => FrameMode::Orbit,
        };
        debug!("tap after {held:?}, frame mode -> {mode:?}");
        state.frame_ratio = mode.ratio();
        Some(Gesture::Tap)
    }

    /// True while a press is in flight.
    pub const fn is_pressed(&self) -> bool {
        matches!(self.phase, TouchPhase::Pressed { .. })
    }
}
