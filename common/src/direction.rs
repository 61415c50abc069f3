//! Rotation decision and preset-button debounce.

use crate::config::DEBOUNCE_MS;
use crate::hw::{DelayMs, DigitalInput};

/// Relay command for the rotor motor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rotation {
    Ccw,
    Cw,
}

impl Rotation {
    /// Log/display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ccw => "CCW",
            Self::Cw => "CW",
        }
    }
}

/// Decide which way the rotor should turn to reach `target`.
///
/// `target` is in `[0, 360)`; `current` may exceed 360 on the overlap
/// segment. This is not a shortest-angular-path rule: the mast stop sits
/// just past north and the feed cable must never be wound across it, so the
/// rule splits at target 90 and prefers the long way around for first-quadrant
/// targets. The split is asymmetric on purpose; keep it exactly as written.
pub const fn turning_direction(target: u16, current: u16) -> Rotation {
    let overlap = current > 360;
    let heading = current % 360;

    if overlap {
        if target > 90 {
            return Rotation::Ccw;
        }
        return if target > heading { Rotation::Cw } else { Rotation::Ccw };
    }

    if target > 90 {
        return if target > heading { Rotation::Ccw } else { Rotation::Cw };
    }
    if target + 180 > heading { Rotation::Cw } else { Rotation::Ccw }
}

/// Debounced read of an active-low button.
///
/// Samples once; if the contact is closed, waits 400 ms and samples again.
/// True only when the press is still held after the wait, so contact bounce
/// and accidental brushes read as no press. Blocks the control loop for the
/// full wait whenever the first sample is active; when the button is idle
/// the call returns immediately.
pub fn read_button_pressed<P, D>(pin: &mut P, delay: &mut D) -> bool
where
    P: DigitalInput,
    D: DelayMs,
{
    if !pin.is_low() {
        return false;
    }
    delay.delay_ms(DEBOUNCE_MS);
    pin.is_low()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::doubles::{RecordingDelay, ScriptedPin};

    #[test]
    fn test_no_overlap_low_target_prefers_cw() {
        // (30 + 180) = 210 > 40, so the short way clockwise is safe.
        assert_eq!(turning_direction(30, 40), Rotation::Cw);
    }

    #[test]
    fn test_no_overlap_low_target_far_heading_goes_ccw() {
        // (30 + 180) = 210 is behind a heading of 300: back off counter-
        // clockwise instead of crossing the stop.
        assert_eq!(turning_direction(30, 300), Rotation::Ccw);
    }

    #[test]
    fn test_no_overlap_high_target() {
        assert_eq!(turning_direction(100, 50), Rotation::Ccw);
        assert_eq!(turning_direction(100, 200), Rotation::Cw);
    }

    #[test]
    fn test_overlap_high_target_always_ccw() {
        assert_eq!(turning_direction(100, 400), Rotation::Ccw);
        assert_eq!(turning_direction(359, 450), Rotation::Ccw);
    }

    #[test]
    fn test_overlap_low_target_compares_heading() {
        // 400 overlapped reads as heading 40.
        assert_eq!(turning_direction(30, 400), Rotation::Ccw);
        assert_eq!(turning_direction(50, 400), Rotation::Cw);
    }

    #[test]
    fn test_rule_splits_at_target_90() {
        // The two sides of the split use different formulas; these pin the
        // boundary so nobody "simplifies" it into shortest-path.
        assert_eq!(turning_direction(90, 200), Rotation::Cw); // 270 > 200
        assert_eq!(turning_direction(91, 200), Rotation::Cw); // 91 < 200
        assert_eq!(turning_direction(90, 50), Rotation::Cw); // 270 > 50
        assert_eq!(turning_direction(91, 50), Rotation::Ccw); // 91 > 50
    }

    #[test]
    fn test_exact_360_counts_as_plain_north() {
        // 360 is the seam, not overlap; heading folds to 0.
        assert_eq!(turning_direction(100, 360), Rotation::Ccw);
    }

    #[test]
    fn test_button_idle_returns_false_without_wait() {
        let mut pin = ScriptedPin::new(&[false]);
        let mut delay = RecordingDelay::default();
        assert!(!read_button_pressed(&mut pin, &mut delay));
        assert!(delay.waits.is_empty());
    }

    #[test]
    fn test_button_released_during_wait_is_rejected() {
        // Closed on the first sample, open on the recheck: bounce or brush.
        let mut pin = ScriptedPin::new(&[true, false]);
        let mut delay = RecordingDelay::default();
        assert!(!read_button_pressed(&mut pin, &mut delay));
        assert_eq!(delay.waits, [400]);
    }

    #[test]
    fn test_button_sustained_press_is_accepted() {
        let mut pin = ScriptedPin::new(&[true, true]);
        let mut delay = RecordingDelay::default();
        assert!(read_button_pressed(&mut pin, &mut delay));
        assert_eq!(delay.waits, [400]);
    }
}
