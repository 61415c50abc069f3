//! Preset target workflow.
//!
//! The preset button walks the console through three phases:
//!
//! - **Waiting**: idle, panel shows the live bearing only.
//! - **Setting**: the operator dials the preset pot; the PRST box echoes it
//!   every tick. A second press commits the target.
//! - **Turning**: the rotation command is latched for the relay driver and
//!   the panel's turn indicator. The phase ends when the heading comes
//!   within the deadband of the target, or on another press.
//!
//! Stopping the motor itself is not this machine's job: the external motor
//! controller owns duration and braking. The deadband exit only releases the
//! latched command and cleans up the indicator.

use crate::config::PRESET_DEADBAND_DEGREES;
use crate::direction::{Rotation, turning_direction};

/// Where the preset workflow currently is.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PresetPhase {
    #[default]
    Waiting,
    Setting,
    Turning,
}

/// Preset workflow state machine, stepped once per control tick.
pub struct PresetControl {
    phase: PresetPhase,
    target: u16,
    command: Option<Rotation>,
}

impl PresetControl {
    pub const fn new() -> Self {
        Self {
            phase: PresetPhase::Waiting,
            target: 0,
            command: None,
        }
    }

    pub const fn phase(&self) -> PresetPhase {
        self.phase
    }

    /// Target captured by the last commit (or being dialed while Setting).
    pub const fn target(&self) -> u16 {
        self.target
    }

    /// Rotation latched for the current turn, if one is in progress.
    pub const fn command(&self) -> Option<Rotation> {
        self.command
    }

    /// Advance the machine one tick.
    ///
    /// `button_pressed` is this tick's debounced preset-button result,
    /// `preset_position` the preset pot scaled to `[0, 360)`, `azimuth` the
    /// current rotor azimuth (possibly overlapped). Returns the rotation
    /// command exactly on the tick the turn is committed, `None` otherwise.
    pub fn step(&mut self, button_pressed: bool, preset_position: u16, azimuth: u16) -> Option<Rotation> {
        match self.phase {
            PresetPhase::Waiting => {
                if button_pressed {
                    self.phase = PresetPhase::Setting;
                    self.target = preset_position;
                }
                None
            }
            PresetPhase::Setting => {
                self.target = preset_position;
                if button_pressed {
                    // Direction is decided once, at commit. Re-deciding
                    // mid-turn could flip the relay while the rotor moves
                    // through the seam.
                    let command = turning_direction(self.target, azimuth);
                    self.command = Some(command);
                    self.phase = PresetPhase::Turning;
                    return Some(command);
                }
                None
            }
            PresetPhase::Turning => {
                if button_pressed || self.reached(azimuth) {
                    self.command = None;
                    self.phase = PresetPhase::Waiting;
                }
                None
            }
        }
    }

    /// Heading within the deadband of the target, seam-aware.
    fn reached(&self, azimuth: u16) -> bool {
        let heading = azimuth % 360;
        let diff = heading.abs_diff(self.target);
        diff.min(360 - diff) <= PRESET_DEADBAND_DEGREES
    }
}

impl Default for PresetControl {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_stays_waiting() {
        let mut preset = PresetControl::new();
        for _ in 0..5 {
            assert_eq!(preset.step(false, 120, 40), None);
        }
        assert_eq!(preset.phase(), PresetPhase::Waiting);
        assert_eq!(preset.command(), None);
    }

    #[test]
    fn test_press_enters_setting_and_tracks_pot() {
        let mut preset = PresetControl::new();
        assert_eq!(preset.step(true, 120, 40), None);
        assert_eq!(preset.phase(), PresetPhase::Setting);

        preset.step(false, 130, 40);
        assert_eq!(preset.target(), 130);
        preset.step(false, 95, 40);
        assert_eq!(preset.target(), 95);
    }

    #[test]
    fn test_second_press_commits_once() {
        let mut preset = PresetControl::new();
        preset.step(true, 100, 50);

        // Commit: target 100, heading 50, no overlap -> CCW.
        assert_eq!(preset.step(true, 100, 50), Some(Rotation::Ccw));
        assert_eq!(preset.phase(), PresetPhase::Turning);
        assert_eq!(preset.command(), Some(Rotation::Ccw));

        // Later ticks keep the latch but never re-emit the edge.
        assert_eq!(preset.step(false, 100, 60), None);
        assert_eq!(preset.command(), Some(Rotation::Ccw));
    }

    #[test]
    fn test_turn_ends_inside_deadband() {
        let mut preset = PresetControl::new();
        preset.step(true, 100, 50);
        preset.step(true, 100, 50);

        assert_eq!(preset.step(false, 100, 80), None);
        assert_eq!(preset.phase(), PresetPhase::Turning);

        // Heading 98 is within 3 degrees of the 100 target.
        preset.step(false, 100, 98);
        assert_eq!(preset.phase(), PresetPhase::Waiting);
        assert_eq!(preset.command(), None);
    }

    #[test]
    fn test_deadband_wraps_across_north() {
        let mut preset = PresetControl::new();
        preset.step(true, 359, 180);
        preset.step(true, 359, 180);
        assert_eq!(preset.phase(), PresetPhase::Turning);

        // Heading 1 is two degrees past the seam from 359.
        preset.step(false, 359, 1);
        assert_eq!(preset.phase(), PresetPhase::Waiting);
    }

    #[test]
    fn test_press_during_turn_cancels() {
        let mut preset = PresetControl::new();
        preset.step(true, 200, 50);
        preset.step(true, 200, 50);
        assert_eq!(preset.phase(), PresetPhase::Turning);

        preset.step(true, 200, 60);
        assert_eq!(preset.phase(), PresetPhase::Waiting);
        assert_eq!(preset.command(), None);
    }

    #[test]
    fn test_commit_from_overlap_uses_heuristic() {
        let mut preset = PresetControl::new();
        preset.step(true, 30, 400);
        // Overlap branch: 30 is not above heading 40 -> CCW.
        assert_eq!(preset.step(true, 30, 400), Some(Rotation::Ccw));
    }
}
