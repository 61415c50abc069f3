//! Hardware I/O traits.
//!
//! The control logic never touches pins or registers directly; it is written
//! against these small traits and each platform supplies adapters:
//!
//! - the Pico 2 firmware over embassy-rp GPIO/ADC,
//! - the desktop simulator over keyboard state,
//! - the unit tests over the scripted doubles in [`doubles`].

/// A blocking analog source, e.g. one ADC channel wired to a potentiometer.
pub trait AnalogInput {
    /// Read one raw sample in `[0, 1023]`.
    fn read(&mut self) -> u16;
}

/// A digital input with active-low convention (pull-up, switch to ground).
pub trait DigitalInput {
    /// True while the contact is closed (pin pulled low).
    fn is_low(&mut self) -> bool;
}

/// One motor relay drive line.
pub trait RelayOutput {
    /// Energize or release the relay.
    fn set_active(&mut self, active: bool);
}

/// A blocking millisecond wait.
pub trait DelayMs {
    fn delay_ms(&mut self, ms: u32);
}

// =============================================================================
// Test Doubles
// =============================================================================
