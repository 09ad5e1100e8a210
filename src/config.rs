#[cfg(feature = "gui")]
use lazy_static::lazy_static;
#[cfg(feature = "gui")]
use std::collections::HashMap;
use std::path::PathBuf;

/// External tick and render rate, in frames per second.
pub const FRAME_RATE: u32 = 60;
/// On-screen pixels per framebuffer pixel.
pub const DEFAULT_SCALE: u32 = 16;
/// Instructions executed per display frame.
pub const DEFAULT_STEPS_PER_FRAME: u32 = 8;

#[cfg(feature = "gui")]
lazy_static! {
    /// Physical key for each logical keypad slot 0x0..0xF:
    /// 1234 / QWER / ASDF / ZXCV.
    pub static ref DEFAULT_KEYMAP: HashMap<u8, sfml::window::Key> = vec![
        (0x0, sfml::window::Key::Num1),
        (0x1, sfml::window::Key::Num2),
        (0x2, sfml::window::Key::Num3),
        (0x3, sfml::window::Key::Num4),
        (0x4, sfml::window::Key::Q),
        (0x5, sfml::window::Key::W),
        (0x6, sfml::window::Key::E),
        (0x7, sfml::window::Key::R),
        (0x8, sfml::window::Key::A),
        (0x9, sfml::window::Key::S),
        (0xA, sfml::window::Key::D),
        (0xB, sfml::window::Key::F),
        (0xC, sfml::window::Key::Z),
        (0xD, sfml::window::Key::X),
        (0xE, sfml::window::Key::C),
        (0xF, sfml::window::Key::V),
    ]
    .into_iter()
    .collect();
}

pub struct Config {
    pub rom: PathBuf,
    pub steps_per_frame: u32,
    pub scale: u32,
}

impl Config {
    /// Parses `ROM [steps-per-frame] [scale]`.
    pub fn from_args<I: Iterator<Item = String>>(mut args: I) -> Result<Config, String> {
        let rom = args.next().ok_or_else(|| "missing ROM path".to_string())?;
        let mut config = Config {
            rom: PathBuf::from(rom),
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
            scale: DEFAULT_SCALE,
        };
        if let Some(steps) = args.next() {
            config.steps_per_frame = steps
                .parse()
                .map_err(|_| format!("bad steps-per-frame: {}", steps))?;
        }
        if let Some(scale) = args.next() {
            config.scale = scale.parse().map_err(|_| format!("bad scale: {}", scale))?;
        }
        Ok(config)
    }
}
