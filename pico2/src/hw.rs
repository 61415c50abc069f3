//! embassy-rp adapters for the console's hardware I/O traits.
//!
//! The control logic in `console-common` only sees [`AnalogInput`],
//! [`DigitalInput`], [`RelayOutput`], and [`DelayMs`]; everything
//! pin-and-register shaped lives here.

use console_common::hw::{AnalogInput, DelayMs, DigitalInput, RelayOutput};
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_time::Duration;

/// One ADC channel read through the shared converter.
///
/// Constructed on the fly per burst so two pots can share the single ADC
/// peripheral. The RP2350 converter is 12-bit while the acquisition
/// pipeline is calibrated for 10-bit counts, so samples are shifted down.
pub struct PotInput<'a, 'd> {
    pub adc: &'a mut Adc<'d, Blocking>,
    pub channel: &'a mut Channel<'d>,
}

impl AnalogInput for PotInput<'_, '_> {
    fn read(&mut self) -> u16 {
        // A failed conversion reads as zero; the position pipeline is total.
        self.adc.blocking_read(self.channel).unwrap_or(0) >> 2
    }
}

/// Active-low button behind an internal pull-up.
pub struct ButtonPin<'d> {
    pin: Input<'d>,
}

impl<'d> ButtonPin<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl DigitalInput for ButtonPin<'_> {
    fn is_low(&mut self) -> bool {
        self.pin.is_low()
    }
}

/// Motor relay drive line, active high.
pub struct RelayPin<'d> {
    pin: Output<'d>,
}

impl<'d> RelayPin<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl RelayOutput for RelayPin<'_> {
    fn set_active(&mut self, active: bool) {
        if active {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}

/// Busy wait on the embassy time driver.
///
/// The debounce is a deliberate blocking wait; the whole control loop
/// stands still for it, and nothing else competes for execution.
pub struct BlockingDelay;

impl DelayMs for BlockingDelay {
    fn delay_ms(&mut self, ms: u32) {
        embassy_time::block_for(Duration::from_millis(u64::from(ms)));
    }
}
