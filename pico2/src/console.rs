//! The console control loop: acquire, decide, draw, flush.
//!
//! Strictly sequential, one tick at a time. The only suspension points are
//! intentional: the 128-read sampling burst and the 400 ms preset debounce
//! both block the loop, and nothing else competes for it.
//!
//! # Pin Map
//!
//! - Buttons (active-low, pull-up): CW=GPIO10, CCW=GPIO11, Preset=GPIO12
//! - Relays (active-high): CW=GPIO14, CCW=GPIO15
//! - Pots: azimuth=GPIO26 (ADC0), preset=GPIO27 (ADC1)
//! - Display: DC=16, CS=17, CLK=18, MOSI=19, Backlight=20

use console_common::bearing::{Bearing, format_degrees};
use console_common::colors::GREY;
use console_common::config::{AZIMUTH_DOMAIN_MAX, PRESET_DOMAIN_MAX};
use console_common::direction::{Rotation, read_button_pressed};
use console_common::hw::{DigitalInput, RelayOutput};
use console_common::position::read_position;
use console_common::preset::{PresetControl, PresetPhase};
use console_common::render::BearingDisplayState;
use console_common::widgets::{
    draw_azimuth,
    draw_cardinal,
    draw_compass_face,
    draw_needle,
    draw_overlap,
    draw_panel_frame,
    draw_preset,
    draw_target,
    draw_turn_indicator,
    draw_welcome,
};
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::Timer;
use embedded_graphics::prelude::*;
use {defmt_rtt as _, panic_probe as _};

use crate::display::display_spi_config;
use crate::hw::{BlockingDelay, ButtonPin, PotInput, RelayPin};
use crate::ili9341::{FRAMEBUFFER, FrameRenderer, Ili9341Flusher};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"rotor-console"),
    embassy_rp::binary_info::rp_program_description!(c"Azimuth rotor console on ILI9341"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Rotor console starting...");

    let p = embassy_rp::init(Default::default());

    // Display pins
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let mut _backlight = Output::new(p.PIN_20, Level::High);

    // Async SPI with DMA (TX-only, the panel's MISO is unused)
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, display_spi_config());
    let mut flusher = Ili9341Flusher::new(spi, dc, cs);
    flusher.init().await;
    info!("Display initialized");

    // Buttons (active-low with internal pull-up)
    let mut cw_button = ButtonPin::new(Input::new(p.PIN_10, Pull::Up));
    let mut ccw_button = ButtonPin::new(Input::new(p.PIN_11, Pull::Up));
    let mut preset_button = ButtonPin::new(Input::new(p.PIN_12, Pull::Up));

    // Relays, released at power-up
    let mut cw_relay = RelayPin::new(Output::new(p.PIN_14, Level::Low));
    let mut ccw_relay = RelayPin::new(Output::new(p.PIN_15, Level::Low));

    // Pots share the one ADC peripheral
    let mut adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let mut azimuth_pot = Channel::new_pin(p.PIN_26, Pull::None);
    let mut preset_pot = Channel::new_pin(p.PIN_27, Pull::None);

    info!("GPIO initialized");

    // Welcome banner on the bare grey screen
    {
        let buffer = unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) };
        let mut frame = FrameRenderer::new(buffer);
        frame.clear(GREY).ok();
        draw_welcome(&mut frame);
    }
    flush(&mut flusher).await;
    Timer::after_millis(2000).await;

    // Static screen: compass face plus panel chrome
    {
        let buffer = unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) };
        let mut frame = FrameRenderer::new(buffer);
        frame.clear(GREY).ok();
        draw_compass_face(&mut frame);
        draw_panel_frame(&mut frame);
    }
    flush(&mut flusher).await;

    // Display state starts fresh alongside the freshly drawn screen
    let mut panel_state = BearingDisplayState::new();
    let mut preset = PresetControl::new();
    let mut delay = BlockingDelay;

    info!("Control loop starting");

    loop {
        // Azimuth acquisition: one blocking 128-read burst per tick
        let azimuth = read_position(
            &mut PotInput {
                adc: &mut adc,
                channel: &mut azimuth_pot,
            },
            AZIMUTH_DOMAIN_MAX,
        );
        let bearing = Bearing::new(azimuth);

        // Manual rotation follows the button level. CCW wins if both are
        // held; the motor must never see both relays energized.
        let ccw_held = ccw_button.is_low();
        let cw_held = cw_button.is_low() && !ccw_held;

        // Preset workflow. The debounced read blocks up to 400 ms.
        let pressed = read_button_pressed(&mut preset_button, &mut delay);
        let dialing = pressed || preset.phase() == PresetPhase::Setting;
        let preset_position = if dialing {
            read_position(
                &mut PotInput {
                    adc: &mut adc,
                    channel: &mut preset_pot,
                },
                PRESET_DOMAIN_MAX,
            )
        } else {
            preset.target()
        };
        if let Some(command) = preset.step(pressed, preset_position, bearing.azimuth()) {
            info!("Preset {}: turning {}", preset.target(), command.label());
        }

        // Manual input overrides the preset latch on the relays.
        let command = if ccw_held {
            Some(Rotation::Ccw)
        } else if cw_held {
            Some(Rotation::Cw)
        } else {
            preset.command()
        };
        ccw_relay.set_active(matches!(command, Some(Rotation::Ccw)));
        cw_relay.set_active(matches!(command, Some(Rotation::Cw)));

        // Render the tick into the persistent framebuffer
        let buffer = unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) };
        let mut frame = FrameRenderer::new(buffer);

        draw_azimuth(&mut frame, &format_degrees(bearing.heading()));
        draw_overlap(&mut frame, bearing.overlap_label());
        if panel_state.check_cardinal_dirty(bearing.cardinal()) {
            draw_cardinal(&mut frame, bearing.cardinal());
            info!("Cardinal: {}", bearing.cardinal().label());
        }
        draw_needle(&mut frame, &mut panel_state, bearing.heading());

        match preset.phase() {
            PresetPhase::Setting => draw_preset(&mut frame, &format_degrees(preset_position)),
            PresetPhase::Turning => draw_target(&mut frame, &format_degrees(preset.target())),
            PresetPhase::Waiting => {
                draw_preset(&mut frame, "    ");
                draw_target(&mut frame, "    ");
            }
        }
        draw_turn_indicator(&mut frame, command);

        flush(&mut flusher).await;

        // No artificial tick delay: the sampling burst paces the loop.
    }
}

async fn flush(flusher: &mut Ili9341Flusher<'_>) {
    // SAFETY: render and flush never overlap; the loop is strictly
    // sequential and nothing else touches the framebuffer.
    let buffer = unsafe { &*core::ptr::addr_of!(FRAMEBUFFER) };
    flusher.flush_buffer(buffer).await;
}
