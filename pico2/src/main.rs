//! Antenna rotor console firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Drives an ILI9341 2.8" SPI panel with a compass face and data column,
//! reads the azimuth and preset potentiometers, and commands the rotor
//! relays. All control logic lives in `console-common`; this binary wires
//! it to the hardware.
//!
//! The firmware proper only exists for ARM. Building this package for the
//! host (the default workspace members do not include it, but `--workspace`
//! builds do) produces a stub that simply type-checks the portable pieces.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match console-common for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[cfg(target_arch = "arm")]
mod console;
#[cfg(target_arch = "arm")]
mod display;
#[cfg(target_arch = "arm")]
mod hw;
#[cfg(target_arch = "arm")]
mod ili9341;

#[cfg(not(target_arch = "arm"))]
fn main() {}
