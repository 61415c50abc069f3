//! Layout, geometry, and calibration constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Positions derived from the screen geometry are computed at compile time as
//! `const` and used throughout the rendering code instead of per-frame
//! arithmetic. Calibration values match the rotor installation: a 10-bit ADC
//! reads the azimuth potentiometer across the full mechanical range.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ILI9341 in landscape: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// X coordinate of the compass sphere center.
pub const CENTER_X: i32 = 120;

/// Y coordinate of the compass sphere center.
pub const CENTER_Y: i32 = 120;

/// Left edge of the data panel column. Everything right of this is panel.
pub const PANEL_X: i32 = 241;

/// Width of the data panel column.
pub const PANEL_WIDTH: u32 = SCREEN_WIDTH - PANEL_X as u32;

// =============================================================================
// Compass Face Geometry
// =============================================================================

/// Outer radius of the cyan bezel ring.
pub const RING_OUTER_RADIUS: u32 = 118;

/// Inner radius of the bezel ring (dial interior starts here).
pub const RING_INNER_RADIUS: u32 = 110;

/// Radius of the white hub the needle pivots on.
pub const HUB_RADIUS: u32 = 10;

/// Spokes run from this radius toward the hub every 45 degrees.
pub const SPOKE_OUTER_RADIUS: i32 = 114;

/// Inner end of the 45-degree spokes.
pub const SPOKE_INNER_RADIUS: i32 = 100;

/// Radius of the 5-degree tick dot ring.
pub const TICK_RADIUS: i32 = 102;

// =============================================================================
// Needle Geometry
// =============================================================================

/// Distance from the hub to the needle apex, in pixels.
pub const NEEDLE_RADIUS: f32 = 70.0;

/// Apex-to-base length of the needle triangle, in pixels.
pub const NEEDLE_LENGTH: f32 = 58.0;

/// Full opening angle at the apex, in degrees. Each base corner sits half
/// of this away from the pointing direction.
pub const NEEDLE_OPENING_DEGREES: f32 = 40.0;

// =============================================================================
// Acquisition Calibration
// =============================================================================

/// Full-scale count of the 10-bit ADC.
pub const ADC_FULL_SCALE: u32 = 1023;

/// Samples averaged per position read. Power of two so the integer divide
/// is a shift.
pub const OVERSAMPLE_COUNT: u32 = 128;

/// Mechanical degrees at azimuth-pot full scale. Greater than 360: the
/// rotor travels past true north onto the overlap segment.
pub const AZIMUTH_DOMAIN_MAX: u32 = 450;

/// Mechanical degrees at preset-pot full scale. Presets cannot ask for the
/// overlap segment.
pub const PRESET_DOMAIN_MAX: u32 = 360;

/// Azimuth above this is overlap travel.
pub const OVERLAP_THRESHOLD: u16 = 360;

// =============================================================================
// Control Timing
// =============================================================================

/// Preset-button debounce hold, in milliseconds. A press counts only if the
/// contact is still closed after this wait.
pub const DEBOUNCE_MS: u32 = 400;

/// The preset turn indicator clears once the heading is within this many
/// degrees of the target.
pub const PRESET_DEADBAND_DEGREES: u16 = 3;
