//! Desktop simulator for the rotor console.
//!
//! Runs the exact control tick the firmware runs, with the keyboard standing
//! in for the pots and buttons:
//!
//! - **Left / Right**: slew the azimuth pot (the overlap segment included)
//! - **[ / ]**: dial the preset pot
//! - **P**: preset button (hold it - the 400 ms debounce is real)
//! - **Q / E**: manual CCW / CW buttons
//! - **Esc**: quit
//!
//! Relay activity is reported on stdout.

use std::thread;
use std::time::Duration;

use console_common::bearing::{Bearing, format_degrees};
use console_common::colors::GREY;
use console_common::config::{AZIMUTH_DOMAIN_MAX, PRESET_DOMAIN_MAX, SCREEN_HEIGHT, SCREEN_WIDTH};
use console_common::direction::{Rotation, read_button_pressed};
use console_common::hw::{AnalogInput, DelayMs, DigitalInput};
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
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

const FRAME_TIME: Duration = Duration::from_millis(33);

/// Raw counts the azimuth pot moves per frame while an arrow key is held.
const SLEW_RATE: i32 = 4;

/// Simulated pot: a 10-bit wiper with deterministic jitter, so the
/// oversampling filter has real noise to average out.
struct SimPot {
    raw: i32,
    tick: u32,
}

impl SimPot {
    fn new(raw: i32) -> Self {
        Self { raw, tick: 0 }
    }

    fn nudge(&mut self, delta: i32) {
        self.raw = (self.raw + delta).clamp(0, 1023);
    }
}

impl AnalogInput for SimPot {
    fn read(&mut self) -> u16 {
        self.tick = self.tick.wrapping_add(1);
        let jitter = (self.tick % 5) as i32 - 2;
        (self.raw + jitter).clamp(0, 1023) as u16
    }
}

/// Keyboard key standing in for an active-low button.
#[derive(Default)]
struct SimButton {
    held: bool,
}

impl DigitalInput for SimButton {
    fn is_low(&mut self) -> bool {
        self.held
    }
}

/// Real wall-clock wait: the simulator blocks exactly like the firmware.
struct SleepDelay;

impl DelayMs for SleepDelay {
    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Rotor Console Sim", &output_settings);

    // Welcome banner, then the static screen
    display.clear(GREY).ok();
    draw_welcome(&mut display);
    window.update(&display);
    thread::sleep(Duration::from_millis(2000));

    display.clear(GREY).ok();
    draw_compass_face(&mut display);
    draw_panel_frame(&mut display);

    // Start mid-range: roughly south, preset near 180
    let mut azimuth_pot = SimPot::new(400);
    let mut preset_pot = SimPot::new(512);
    let mut cw_button = SimButton::default();
    let mut ccw_button = SimButton::default();
    let mut preset_button = SimButton::default();
    let mut slew = 0i32;

    let mut panel_state = BearingDisplayState::new();
    let mut preset = PresetControl::new();
    let mut delay = SleepDelay;
    let mut last_command: Option<Rotation> = None;

    'running: loop {
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => break 'running,
                        Keycode::Left => slew = -SLEW_RATE,
                        Keycode::Right => slew = SLEW_RATE,
                        Keycode::LeftBracket => preset_pot.nudge(-8),
                        Keycode::RightBracket => preset_pot.nudge(8),
                        Keycode::P => preset_button.held = true,
                        Keycode::Q => ccw_button.held = true,
                        Keycode::E => cw_button.held = true,
                        _ => {}
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::Left | Keycode::Right => slew = 0,
                    Keycode::P => preset_button.held = false,
                    Keycode::Q => ccw_button.held = false,
                    Keycode::E => cw_button.held = false,
                    _ => {}
                },
                _ => {}
            }
        }

        azimuth_pot.nudge(slew);

        // The same control tick the firmware runs
        let azimuth = read_position(&mut azimuth_pot, AZIMUTH_DOMAIN_MAX);
        let bearing = Bearing::new(azimuth);

        let ccw_held = ccw_button.is_low();
        let cw_held = cw_button.is_low() && !ccw_held;

        let pressed = read_button_pressed(&mut preset_button, &mut delay);
        let dialing = pressed || preset.phase() == PresetPhase::Setting;
        let preset_position = if dialing {
            read_position(&mut preset_pot, PRESET_DOMAIN_MAX)
        } else {
            preset.target()
        };
        if let Some(command) = preset.step(pressed, preset_position, bearing.azimuth()) {
            println!("preset {} -> turning {}", preset.target(), command.label());
        }

        let command = if ccw_held {
            Some(Rotation::Ccw)
        } else if cw_held {
            Some(Rotation::Cw)
        } else {
            preset.command()
        };
        if command != last_command {
            match command {
                Some(rotation) => println!("relay {} energized", rotation.label()),
                None => println!("relays released"),
            }
            last_command = command;
        }

        draw_azimuth(&mut display, &format_degrees(bearing.heading()));
        draw_overlap(&mut display, bearing.overlap_label());
        if panel_state.check_cardinal_dirty(bearing.cardinal()) {
            draw_cardinal(&mut display, bearing.cardinal());
        }
        draw_needle(&mut display, &mut panel_state, bearing.heading());

        match preset.phase() {
            PresetPhase::Setting => draw_preset(&mut display, &format_degrees(preset_position)),
            PresetPhase::Turning => draw_target(&mut display, &format_degrees(preset.target())),
            PresetPhase::Waiting => {
                draw_preset(&mut display, "    ");
                draw_target(&mut display, "    ");
            }
        }
        draw_turn_indicator(&mut display, command);

        window.update(&display);
        thread::sleep(FRAME_TIME);
    }
}
