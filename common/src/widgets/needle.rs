//! The bearing needle: an isosceles triangle redrawn incrementally.
//!
//! A full face redraw per tick would visibly flicker on the panel's SPI
//! budget. Instead each update erases just the previous triangle (refilled
//! in the dial color) and fills the new one. The previous vertex set lives
//! in [`BearingDisplayState`]; before the first draw it holds a degenerate
//! off-canvas triangle, so the erase pass is a no-op.

#[cfg(not(test))]
use micromath::F32Ext;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};

use crate::colors::{BLACK, WHITE};
use crate::config::{CENTER_X, CENTER_Y, NEEDLE_LENGTH, NEEDLE_OPENING_DEGREES, NEEDLE_RADIUS};
use crate::render::{BearingDisplayState, NeedleVertices};

const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Vertex set for a needle pointing at `heading` degrees.
///
/// The apex sits `NEEDLE_RADIUS` px out from the hub; the base corners sit
/// `NEEDLE_RADIUS - NEEDLE_LENGTH` px out, half the opening angle to either
/// side of the pointing direction.
pub fn needle_vertices(heading: u16) -> NeedleVertices {
    // Phase -90 degrees so heading 0 points at the top of the dial.
    let theta = (f32::from(heading) - 90.0) * DEG_TO_RAD;
    let half_opening = NEEDLE_OPENING_DEGREES * DEG_TO_RAD / 2.0;
    let base_radius = NEEDLE_RADIUS - NEEDLE_LENGTH;

    [
        polar_offset(theta, NEEDLE_RADIUS),
        polar_offset(theta - half_opening, base_radius),
        polar_offset(theta + half_opening, base_radius),
    ]
}

fn polar_offset(theta: f32, radius: f32) -> Point {
    Point::new(
        (theta.cos() * radius) as i32 + CENTER_X,
        (theta.sin() * radius) as i32 + CENTER_Y,
    )
}

/// Erase the previous needle, draw the one for `heading`, record it.
pub fn draw_needle<D>(display: &mut D, state: &mut BearingDisplayState, heading: u16)
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_triangle(display, state.last_needle(), BLACK);

    let vertices = needle_vertices(heading);
    fill_triangle(display, vertices, WHITE);
    state.set_last_needle(vertices);
}

fn fill_triangle<D>(display: &mut D, vertices: NeedleVertices, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    Triangle::new(vertices[0], vertices[1], vertices[2])
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    /// Plain in-memory RGB565 canvas, initialized to the dial color.
    struct Canvas {
        pixels: Vec<Rgb565>,
    }

    impl Canvas {
        fn new() -> Self {
            Self {
                pixels: vec![BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            }
        }

        fn pixel(&self, p: Point) -> Rgb565 {
            self.pixels[(p.y as u32 * SCREEN_WIDTH + p.x as u32) as usize]
        }

        fn count(&self, color: Rgb565) -> usize {
            self.pixels.iter().filter(|&&c| c == color).count()
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
        }
    }

    impl DrawTarget for Canvas {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0 && point.x < SCREEN_WIDTH as i32 && point.y >= 0 && point.y < SCREEN_HEIGHT as i32 {
                    let idx = (point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize;
                    self.pixels[idx] = color;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_vertices_heading_zero_points_up() {
        let [apex, right, left] = needle_vertices(0);
        assert_eq!(apex, Point::new(CENTER_X, CENTER_Y - 70));
        // Base corners sit 12 px out, symmetric about the vertical axis.
        assert_eq!(right.y, left.y);
        assert_eq!(right.x + left.x, 2 * CENTER_X);
        assert!(right.y < CENTER_Y && right.y > apex.y);
    }

    #[test]
    fn test_vertices_heading_east() {
        let [apex, ..] = needle_vertices(90);
        assert_eq!(apex, Point::new(CENTER_X + 70, CENTER_Y));
    }

    #[test]
    fn test_first_draw_erases_nothing() {
        let mut canvas = Canvas::new();
        let mut state = BearingDisplayState::new();

        draw_needle(&mut canvas, &mut state, 45);

        // Only needle pixels differ from the background.
        assert!(canvas.count(WHITE) > 0);
        assert_eq!(canvas.count(WHITE) + canvas.count(BLACK), canvas.pixels.len());
    }

    /// Interior point of a triangle, safe to probe regardless of how the
    /// rasterizer treats boundary pixels.
    fn centroid(v: NeedleVertices) -> Point {
        Point::new((v[0].x + v[1].x + v[2].x) / 3, (v[0].y + v[1].y + v[2].y) / 3)
    }

    #[test]
    fn test_second_draw_leaves_exactly_one_needle() {
        let mut canvas = Canvas::new();
        let mut state = BearingDisplayState::new();
        draw_needle(&mut canvas, &mut state, 10);

        draw_needle(&mut canvas, &mut state, 200);

        // The old needle is gone, the new one is present...
        assert_eq!(canvas.pixel(centroid(needle_vertices(10))), BLACK);
        assert_eq!(canvas.pixel(centroid(needle_vertices(200))), WHITE);

        // ...and the canvas is pixel-identical to drawing 200 alone: the
        // erase covered exactly the previous triangle.
        let mut fresh = Canvas::new();
        let mut fresh_state = BearingDisplayState::new();
        draw_needle(&mut fresh, &mut fresh_state, 200);
        assert_eq!(canvas.pixels, fresh.pixels);
    }

    #[test]
    fn test_sweep_never_leaves_residue() {
        let mut canvas = Canvas::new();
        let mut state = BearingDisplayState::new();
        for heading in (0..360).step_by(15) {
            draw_needle(&mut canvas, &mut state, heading);
        }

        let mut fresh = Canvas::new();
        let mut fresh_state = BearingDisplayState::new();
        draw_needle(&mut fresh, &mut fresh_state, 345);
        assert_eq!(canvas.pixels, fresh.pixels);
    }
}
