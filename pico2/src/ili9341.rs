//! Async ILI9341 display driver for embassy-rp.
//!
//! The driver is split into two components:
//! - [`FrameRenderer`]: Implements `DrawTarget`, writes into the framebuffer
//! - [`Ili9341Flusher`]: Owns the SPI peripheral, handles DMA transfers
//!
//! The console renders and flushes strictly in sequence within one control
//! tick, so a single 150 KB framebuffer is enough; there is no parallel
//! render/flush to double-buffer for.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;

/// Display dimensions (landscape mode after rotation).
pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;
const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

/// Static framebuffer (153,600 bytes).
pub static mut FRAMEBUFFER: [u8; BUFFER_SIZE] = [0u8; BUFFER_SIZE];

// ILI9341 commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const PASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const PIXFMT: u8 = 0x3A;
const FRMCTR1: u8 = 0xB1;
const PWCTR1: u8 = 0xC0;
const PWCTR2: u8 = 0xC1;
const VMCTR1: u8 = 0xC5;

// MADCTL flags
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange
const MADCTL_BGR: u8 = 0x08; // BGR subpixel order

/// ILI9341 flusher - owns SPI and pushes the framebuffer out via DMA.
pub struct Ili9341Flusher<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
}

impl<'d> Ili9341Flusher<'d> {
    pub fn new(spi: Spi<'d, SPI0, Async>, dc: Output<'d>, cs: Output<'d>) -> Self {
        Self { spi, dc, cs }
    }

    /// Initialize the panel: power/VCOM setup, landscape rotation, RGB565.
    pub async fn init(&mut self) {
        self.write_command(SWRESET).await;
        Timer::after_millis(150).await;

        // Power and VCOM levels per the module's reference values
        self.write_command(PWCTR1).await;
        self.write_data(&[0x23]).await;
        self.write_command(PWCTR2).await;
        self.write_data(&[0x10]).await;
        self.write_command(VMCTR1).await;
        self.write_data(&[0x3E, 0x28]).await;

        // Landscape with the panel connector on the left
        self.write_command(MADCTL).await;
        self.write_data(&[MADCTL_MV | MADCTL_MX | MADCTL_BGR]).await;

        // 16-bit RGB565 pixels
        self.write_command(PIXFMT).await;
        self.write_data(&[0x55]).await;

        // 79 Hz frame rate
        self.write_command(FRMCTR1).await;
        self.write_data(&[0x00, 0x18]).await;

        self.write_command(SLPOUT).await;
        Timer::after_millis(120).await;
        self.write_command(DISPON).await;
        Timer::after_millis(10).await;

        // Window is the full screen for the lifetime of the console
        self.set_window(0, 0, WIDTH as u16, HEIGHT as u16).await;
    }

    /// Send a command byte (DC low during transfer).
    async fn write_command(&mut self, cmd: u8) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        self.cs.set_high();
    }

    /// Send data bytes (DC high during transfer).
    async fn write_data(&mut self, data: &[u8]) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.write(data).await.ok();
        self.cs.set_high();
    }

    /// Set the drawing window.
    async fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) {
        let x1 = x + w - 1;
        let y1 = y + h - 1;

        self.write_command(CASET).await;
        self.write_data(&[(x >> 8) as u8, x as u8, (x1 >> 8) as u8, x1 as u8])
            .await;

        self.write_command(PASET).await;
        self.write_data(&[(y >> 8) as u8, y as u8, (y1 >> 8) as u8, y1 as u8])
            .await;
    }

    /// Push a rendered frame to the panel.
    pub async fn flush_buffer(&mut self, buffer: &[u8]) {
        self.cs.set_low();
        self.dc.set_low();
        // Single-byte command: blocking write is cheaper than DMA setup
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        self.spi.write(buffer).await.ok();
        self.cs.set_high();
    }
}

/// Framebuffer renderer - implements `DrawTarget`, owns no hardware.
pub struct FrameRenderer<'a> {
    framebuffer: &'a mut [u8],
}

impl<'a> FrameRenderer<'a> {
    pub fn new(framebuffer: &'a mut [u8]) -> Self {
        Self { framebuffer }
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = (y as usize * WIDTH + x as usize) * 2;
            let raw: RawU16 = color.into();
            let bytes = raw.into_inner().to_be_bytes();
            self.framebuffer[idx] = bytes[0];
            self.framebuffer[idx + 1] = bytes[1];
        }
    }
}

impl OriginDimensions for FrameRenderer<'_> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameRenderer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &embedded_graphics::primitives::Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();

        for y in drawable_area.rows() {
            let row_start = y as usize * WIDTH;
            for x in drawable_area.columns() {
                let idx = (row_start + x as usize) * 2;
                self.framebuffer[idx] = bytes[0];
                self.framebuffer[idx + 1] = bytes[1];
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let area = self.bounding_box();
        self.fill_solid(&area, color)
    }
}
