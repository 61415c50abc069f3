//! The right-hand data panel: bearing readout, overlap flag, preset and
//! target boxes, cardinal sector, and the turn-indicator arrows.
//!
//! Positions are fixed top-left cursor coordinates; the character styles
//! carry background colors, so rewriting a box clears its previous content
//! in the same pass.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;

use crate::bearing::CardinalSector;
use crate::colors::{BLACK, BLUE, GREY, WHITE, YELLOW};
use crate::config::{PANEL_WIDTH, PANEL_X, SCREEN_HEIGHT};
use crate::direction::Rotation;
use crate::styles::{BANNER_STYLE, BOX_STYLE, TITLE_STYLE, TOP_LEFT, VALUE_STYLE};

// =============================================================================
// Panel Layout
// =============================================================================

const AZT_TITLE_POS: Point = Point::new(255, 4);
const AZIMUTH_POS: Point = Point::new(246, 32);

const OVL_BOX: Rectangle = Rectangle::new(Point::new(241, 59), Size::new(79, 27));
const OVL_POS: Point = Point::new(255, 62);

const PRST_TITLE_POS: Point = Point::new(246, 94);
const PRESET_POS: Point = Point::new(246, 122);

const RULE: Rectangle = Rectangle::new(Point::new(241, 147), Size::new(79, 3));

const TO_TITLE_POS: Point = Point::new(264, 156);
const TARGET_POS: Point = Point::new(246, 184);

const CARDINAL_BOX: Rectangle = Rectangle::new(Point::new(241, 208), Size::new(79, 27));
const CARDINAL_CLEAR_POS: Point = Point::new(255, 211);
const CARDINAL_Y: i32 = 211;

/// Draw the static panel chrome: column background, titles, boxes, rule.
pub fn draw_panel_frame<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::new(PANEL_X, 0), Size::new(PANEL_WIDTH, SCREEN_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();

    Text::with_text_style("AZT", AZT_TITLE_POS, TITLE_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    OVL_BOX.into_styled(PrimitiveStyle::with_fill(BLUE)).draw(display).ok();

    Text::with_text_style("PRST", PRST_TITLE_POS, TITLE_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    RULE.into_styled(PrimitiveStyle::with_fill(WHITE)).draw(display).ok();

    Text::with_text_style("TO", TO_TITLE_POS, TITLE_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    CARDINAL_BOX
        .into_styled(PrimitiveStyle::with_fill(BLUE))
        .draw(display)
        .ok();
}

/// Current bearing readout under the AZT title.
pub fn draw_azimuth<D>(display: &mut D, text: &str)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, AZIMUTH_POS, VALUE_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}

/// Overlap flag in its blue box ("OVL" or blanks).
pub fn draw_overlap<D>(display: &mut D, label: &str)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(label, OVL_POS, BOX_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}

/// Cardinal sector in its blue box, centered by label width.
pub fn draw_cardinal<D>(display: &mut D, sector: CardinalSector)
where
    D: DrawTarget<Color = Rgb565>,
{
    let label = sector.label();

    // Blank the box width first; one- and two-letter labels start at
    // different columns.
    Text::with_text_style("   ", CARDINAL_CLEAR_POS, BOX_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    let x = if label.len() == 2 { 264 } else { 273 };
    Text::with_text_style(label, Point::new(x, CARDINAL_Y), BOX_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}

/// Preset value being dialed, under the PRST title.
pub fn draw_preset<D>(display: &mut D, text: &str)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, PRESET_POS, VALUE_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}

/// Committed target, under the TO title.
pub fn draw_target<D>(display: &mut D, text: &str)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, TARGET_POS, VALUE_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}

// =============================================================================
// Turn Indicator Arrows
// =============================================================================

/// Show the arrow matching the active command, erase the other (or both).
pub fn draw_turn_indicator<D>(display: &mut D, command: Option<Rotation>)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_left_arrow(display, matches!(command, Some(Rotation::Ccw)));
    draw_right_arrow(display, matches!(command, Some(Rotation::Cw)));
}

fn draw_left_arrow<D>(display: &mut D, draw: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    if draw {
        Triangle::new(Point::new(4, 224), Point::new(16, 216), Point::new(16, 230))
            .into_styled(PrimitiveStyle::with_fill(YELLOW))
            .draw(display)
            .ok();
        Rectangle::new(Point::new(16, 220), Size::new(17, 6))
            .into_styled(PrimitiveStyle::with_fill(YELLOW))
            .draw(display)
            .ok();
    } else {
        Rectangle::new(Point::new(4, 214), Size::new(30, 18))
            .into_styled(PrimitiveStyle::with_fill(GREY))
            .draw(display)
            .ok();
    }
}

fn draw_right_arrow<D>(display: &mut D, draw: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    if draw {
        Triangle::new(Point::new(236, 224), Point::new(224, 216), Point::new(224, 230))
            .into_styled(PrimitiveStyle::with_fill(YELLOW))
            .draw(display)
            .ok();
        Rectangle::new(Point::new(210, 220), Size::new(17, 6))
            .into_styled(PrimitiveStyle::with_fill(YELLOW))
            .draw(display)
            .ok();
    } else {
        Rectangle::new(Point::new(210, 216), Size::new(30, 18))
            .into_styled(PrimitiveStyle::with_fill(GREY))
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Welcome Banner
// =============================================================================

/// Startup banner, drawn on the bare grey screen before the face.
pub fn draw_welcome<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("G-450 rotor console", Point::new(52, 96), BANNER_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
    Text::with_text_style("azimuth + preset control", Point::new(22, 120), BANNER_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}
