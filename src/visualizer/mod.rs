extern crate sfml;

use crate::config::{Config, DEFAULT_KEYMAP, FRAME_RATE};
use crate::emulator::basics::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::emulator::vm::Machine;
use sfml::graphics::{Color, RectangleShape, RenderTarget, RenderWindow, Shape, Transformable};
use sfml::system::Vector2f;
use sfml::window::{ContextSettings, Event, Key, Style, VideoMode};

/// The window and the frame-paced driver loop around the machine: per frame,
/// translate keyboard events into keypad writes, run a slice of
/// instructions, tick the timers once and redraw.
pub struct Visualizer {
    window: RenderWindow,
    scale: u32,
    steps_per_frame: u32,
}

impl Visualizer {
    pub fn new(config: &Config) -> Visualizer {
        let video_mode = VideoMode::new(
            SCREEN_WIDTH as u32 * config.scale,
            SCREEN_HEIGHT as u32 * config.scale,
            32,
        );
        let mut window = RenderWindow::new(
            video_mode,
            "crisp8",
            Style::CLOSE,
            &ContextSettings::default(),
        );
        window.set_framerate_limit(FRAME_RATE);
        Visualizer {
            window,
            scale: config.scale,
            steps_per_frame: config.steps_per_frame,
        }
    }

    /// Runs the machine until the window closes or it faults.
    pub fn run(&mut self, machine: &mut Machine) {
        while self.window.is_open() {
            self.handle_events(machine);
            for _ in 0..self.steps_per_frame {
                if let Err(fault) = machine.step() {
                    eprintln!("machine halted: {}", fault);
                    self.window.close();
                    break;
                }
            }
            machine.tick_timers();
            self.render(machine);
        }
    }

    fn handle_events(&mut self, machine: &mut Machine) {
        while let Some(event) = self.window.poll_event() {
            match event {
                Event::Closed => self.window.close(),
                Event::KeyPressed {
                    code: Key::Escape, ..
                } => self.window.close(),
                Event::KeyPressed { code: Key::F5, .. } => {
                    if let Err(err) = machine.reset() {
                        eprintln!("reset failed: {}", err);
                        self.window.close();
                    }
                }
                Event::KeyPressed { code, .. } => {
                    if let Some(slot) = keypad_slot(code) {
                        machine.set_key(slot, true);
                    }
                }
                Event::KeyReleased { code, .. } => {
                    if let Some(slot) = keypad_slot(code) {
                        machine.set_key(slot, false);
                    }
                }
                _ => { /* do nothing */ }
            }
        }
    }

    fn render(&mut self, machine: &Machine) {
        let background = if machine.sound_active() {
            // the buzzer is a background flash; there is no audio device
            Color::rgb(48, 48, 96)
        } else {
            Color::BLACK
        };
        self.window.clear(background);
        let mut pixel = RectangleShape::new();
        pixel.set_size(Vector2f::new(self.scale as f32, self.scale as f32));
        pixel.set_fill_color(Color::WHITE);
        for y in 0..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                if machine.pixel(x, y) {
                    pixel.set_position(Vector2f::new(
                        (x as u32 * self.scale) as f32,
                        (y as u32 * self.scale) as f32,
                    ));
                    self.window.draw(&pixel);
                }
            }
        }
        self.window.display();
    }
}

fn keypad_slot(code: Key) -> Option<u8> {
    DEFAULT_KEYMAP
        .iter()
        .find(|(_, key)| **key == code)
        .map(|(slot, _)| *slot)
}
