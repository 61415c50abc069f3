//! Static compass face: bezel ring, hub, spokes, tick ring, cardinal markers.
//!
//! Drawn once after display initialization. Everything that changes per tick
//! (needle, panel text) is drawn over it by the other widgets.

#[cfg(not(test))]
use micromath::F32Ext;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::Text;

use crate::colors::{BLACK, CYAN, WHITE};
use crate::config::{
    CENTER_X,
    CENTER_Y,
    HUB_RADIUS,
    RING_INNER_RADIUS,
    RING_OUTER_RADIUS,
    SPOKE_INNER_RADIUS,
    SPOKE_OUTER_RADIUS,
    TICK_RADIUS,
};
use crate::styles::{MARKER_STYLE, TOP_LEFT};

const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Screen angles are phased -90 degrees so heading 0 points up.
const SKIP_PHASE: f32 = 90.0;

const SPOKE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(CYAN, 1);

/// Point at `radius` pixels from the hub toward compass degree `deg`.
fn polar(deg: f32, radius: f32) -> Point {
    let theta = (deg - SKIP_PHASE) * DEG_TO_RAD;
    Point::new(
        (theta.cos() * radius) as i32 + CENTER_X,
        (theta.sin() * radius) as i32 + CENTER_Y,
    )
}

/// Draw the whole static face: concentric circles, spokes, tick ring.
pub fn draw_compass_face<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let center = Point::new(CENTER_X, CENTER_Y);

    // Bezel: cyan disc with the dial interior punched out in black.
    filled_circle(display, center, RING_OUTER_RADIUS, CYAN);
    filled_circle(display, center, RING_INNER_RADIUS, BLACK);
    filled_circle(display, center, HUB_RADIUS, WHITE);

    draw_spokes(display);
    draw_tick_ring(display);
}

fn filled_circle<D>(display: &mut D, center: Point, radius: u32, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, radius * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Short radial lines every 45 degrees, between the tick ring and bezel.
fn draw_spokes<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    for deg in (0..360u16).step_by(45) {
        let outer = polar(f32::from(deg), SPOKE_OUTER_RADIUS as f32);
        let inner = polar(f32::from(deg), SPOKE_INNER_RADIUS as f32);
        Line::new(outer, inner).into_styled(SPOKE_STYLE).draw(display).ok();
    }
}

/// One dot every 5 degrees; the four cardinal dots get a white bead and a
/// letter placed toward the dial interior.
fn draw_tick_ring<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    for deg in (0..360u16).step_by(5) {
        let dot = polar(f32::from(deg), TICK_RADIUS as f32);
        Pixel(dot, CYAN).draw(display).ok();

        match deg {
            0 => cardinal_marker(display, dot, "N", Point::new(-5, 8)),
            90 => cardinal_marker(display, dot, "E", Point::new(-16, -7)),
            180 => cardinal_marker(display, dot, "S", Point::new(-5, -22)),
            270 => cardinal_marker(display, dot, "W", Point::new(10, -7)),
            _ => {}
        }
    }
}

fn cardinal_marker<D>(display: &mut D, at: Point, label: &str, offset: Point)
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(at, 5)
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
    Text::with_text_style(label, at + offset, MARKER_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_zero_degrees_points_up() {
        let p = polar(0.0, 100.0);
        assert_eq!(p, Point::new(CENTER_X, CENTER_Y - 100));
    }

    #[test]
    fn test_polar_cardinal_points() {
        assert_eq!(polar(90.0, 100.0), Point::new(CENTER_X + 100, CENTER_Y));
        assert_eq!(polar(180.0, 100.0), Point::new(CENTER_X, CENTER_Y + 100));
        assert_eq!(polar(270.0, 100.0), Point::new(CENTER_X - 100, CENTER_Y));
    }
}
