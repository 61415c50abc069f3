//! Color constants for the console screen.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the ILI9341 panel and requires no conversion
//! when writing to the display buffer. Standard colors come from the
//! `RgbColor` trait constants; the face grey is application-specific.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Compass dial interior and panel background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Needle fill, hub, and title text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure blue (0, 0, 31). Overlap and cardinal box backgrounds.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Bearing values and turn-indicator arrows.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure cyan (0, 63, 31). Compass ring, spokes, and tick dots.
pub const CYAN: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Console face background grey.
/// RGB565: (11, 23, 11) - the classic 0x5AEB instrument grey.
pub const GREY: Rgb565 = Rgb565::new(11, 23, 11);
