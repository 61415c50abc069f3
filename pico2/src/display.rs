//! Display configuration for the console's ILI9341 2.8" SPI panel.
//!
//! Pin mapping:
//! - DC: GPIO16
//! - CS: GPIO17
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: Tied to RUN pin (resets with the Pico)

use embassy_rp::spi::Config as SpiConfig;

/// SPI configuration for the ILI9341 display.
///
/// The datasheet write cycle works out to 10 MHz; the panels in these
/// consoles run reliably at 40 MHz, which keeps a full-frame flush under
/// 31 ms.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000;
    config
}
