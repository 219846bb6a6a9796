use std::path::PathBuf;

use retroboy_headless::RunConfig;

const USAGE: &str = "Usage: retroboy_headless <rom_path> [cycles]";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{USAGE}");
        std::process::exit(2);
    });

    let config = match args.next() {
        Some(cycles) => {
            let cycles: u64 = cycles.parse().unwrap_or_else(|_| {
                eprintln!("Invalid cycles '{cycles}'; expected an integer.\n{USAGE}");
                std::process::exit(2);
            });
            RunConfig::builder().rom(rom).cycles(cycles).build()
        }
        None => RunConfig::builder().rom(rom).build(),
    };

    if let Err(err) = retroboy_headless::run(&config) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
