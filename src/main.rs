use crisp8::config::Config;
use crisp8::emulator::vm::Machine;
use crisp8::visualizer::Visualizer;
use std::env;
use std::process;

fn main() {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: crisp8-bin ROM [steps-per-frame] [scale]");
            process::exit(2);
        }
    };

    let mut machine = Machine::new();
    if let Err(err) = machine.load_program(&config.rom) {
        eprintln!("{}", err);
        process::exit(1);
    }

    Visualizer::new(&config).run(&mut machine);
}
