extern crate crisp8;
use crisp8::emulator::ascii_display;
use crisp8::emulator::basics::{ENTRY_POINT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crisp8::emulator::errors::Fault;
use crisp8::emulator::vm::Machine;

/// Draws the font glyphs 0..3 side by side, then spins on a self-jump.
const DIGITS_PROGRAM: &[u8] = &[
    0x60, 0x00, // V0 = 0
    0xF0, 0x29, // I = glyph(V0)
    0x61, 0x00, // V1 = 0 (x)
    0x62, 0x00, // V2 = 0 (y)
    0xD1, 0x25, // draw
    0x60, 0x01, // V0 = 1
    0xF0, 0x29, //
    0x61, 0x05, // x = 5
    0xD1, 0x25, //
    0x60, 0x02, // V0 = 2
    0xF0, 0x29, //
    0x61, 0x0A, // x = 10
    0xD1, 0x25, //
    0x60, 0x03, // V0 = 3
    0xF0, 0x29, //
    0x61, 0x0F, // x = 15
    0xD1, 0x25, //
    0x12, 0x22, // jump to self
];

const EXPECTED_ROWS: [&str; 5] = [
    "@@@@   @  @@@@ @@@@",
    "@  @  @@     @    @",
    "@  @   @  @@@@ @@@@",
    "@  @   @  @       @",
    "@@@@  @@@ @@@@ @@@@",
];

fn load_machine(program: &[u8]) -> Machine {
    let mut machine = Machine::new();
    machine.load_image(program).unwrap();
    machine
}

fn run_until_loop(machine: &mut Machine) {
    loop {
        let pc = machine.program_counter();
        machine.step().unwrap();
        if machine.program_counter() == pc {
            break;
        }
    }
}

#[test]
fn test_draw_digits() {
    let mut machine = load_machine(DIGITS_PROGRAM);
    run_until_loop(&mut machine);
    for y in 0..SCREEN_HEIGHT {
        for x in 0..SCREEN_WIDTH {
            let expected = EXPECTED_ROWS
                .get(y)
                .map_or(false, |row| row.as_bytes().get(x) == Some(&b'@'));
            assert_eq!(
                machine.pixel(x, y),
                expected,
                "mismatch at {:?}\n{}",
                (x, y),
                ascii_display::render(&machine)
            );
        }
    }
}

#[test]
fn test_subroutine_arithmetic() {
    let program: &[u8] = &[
        0x60, 0x07, // V0 = 7
        0x61, 0x08, // V1 = 8
        0x22, 0x0A, // call 0x20A
        0x12, 0x06, // jump to self
        0x00, 0x00, // padding, never reached
        0x82, 0x00, // 0x20A: V2 = V0
        0x82, 0x14, // V2 += V1
        0x00, 0xEE, // return
    ];
    let mut machine = load_machine(program);
    run_until_loop(&mut machine);
    assert_eq!(machine.registers()[2], 15);
    assert_eq!(machine.registers()[0xF], 0);
    assert_eq!(machine.program_counter(), 0x206);
}

#[test]
fn test_fault_reaches_the_driver() {
    let mut machine = load_machine(&[0x00, 0xEE]);
    assert_eq!(machine.step(), Err(Fault::StackUnderflow { pc: 0x200 }));
}

#[test]
fn test_reset_clears_a_running_machine() {
    let mut machine = load_machine(DIGITS_PROGRAM);
    run_until_loop(&mut machine);
    assert!((0..SCREEN_WIDTH).any(|x| machine.pixel(x, 0)));

    machine.reset().unwrap();
    assert_eq!(machine.program_counter(), ENTRY_POINT);
    assert!(!(0..SCREEN_WIDTH).any(|x| (0..SCREEN_HEIGHT).any(|y| machine.pixel(x, y))));

    // the program is intact: it runs to the same picture again
    run_until_loop(&mut machine);
    assert!(machine.pixel(0, 0));
}
