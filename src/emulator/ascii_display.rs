use super::basics::{SCREEN_HEIGHT, SCREEN_WIDTH};
use super::vm::Machine;

/// Renders the framebuffer as a `@`/space grid, one line per display row.
/// Meant for debugging and readable test failures.
pub fn render(machine: &Machine) -> String {
    let mut out = String::with_capacity((SCREEN_WIDTH + 1) * SCREEN_HEIGHT);
    for y in 0..SCREEN_HEIGHT {
        for x in 0..SCREEN_WIDTH {
            out.push(if machine.pixel(x, y) { '@' } else { ' ' });
        }
        out.push('\n');
    }
    out
}
