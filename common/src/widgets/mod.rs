//! Widget components for the console screen.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform
//! independence: the firmware hands in its framebuffer renderer, the
//! simulator its window-backed display.

pub mod compass;
pub mod needle;
pub mod panel;

pub use compass::draw_compass_face;
pub use needle::{draw_needle, needle_vertices};
pub use panel::{
    draw_azimuth,
    draw_cardinal,
    draw_overlap,
    draw_panel_frame,
    draw_preset,
    draw_target,
    draw_turn_indicator,
    draw_welcome,
};
