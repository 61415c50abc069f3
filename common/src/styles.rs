//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! The panel rewrites its text boxes every tick, so the character styles
//! carry an explicit background color: printing over the previous value
//! clears it in the same pass, the way the original console hardware fonts
//! worked. All styles are `const` and live in the binary's read-only data.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{BLACK, BLUE, WHITE, YELLOW};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Left-aligned, top-baseline text. Panel positions are top-left anchored,
/// matching the cursor convention the layout was designed with.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Panel titles (AZT, PRST, TO): white on the black panel column.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyleBuilder::new()
    .font(&PROFONT_24_POINT)
    .text_color(WHITE)
    .background_color(BLACK)
    .build();

/// Bearing and preset values: yellow on the black panel column.
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyleBuilder::new()
    .font(&PROFONT_24_POINT)
    .text_color(YELLOW)
    .background_color(BLACK)
    .build();

/// Text inside the blue boxes (OVL flag, cardinal sector).
pub const BOX_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyleBuilder::new()
    .font(&PROFONT_24_POINT)
    .text_color(WHITE)
    .background_color(BLUE)
    .build();

/// Welcome banner text: yellow, transparent background over the grey face.
pub const BANNER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, YELLOW);

/// Small N/E/S/W markers on the dial, white on the dial interior.
pub const MARKER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyleBuilder::new()
    .font(&FONT_6X10)
    .text_color(WHITE)
    .background_color(BLACK)
    .build();
