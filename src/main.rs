// Trains a single unit and prints its answers to the configured queries.
//
//   cargo run                      # built-in dog/cat run
//   cargo run -- run.json          # run described by a JSON RunConfig
//   RUST_LOG=debug cargo run       # progress every `log_every` iterations
use std::process::ExitCode;

use ferrite_unit::{train, RunConfig};
use log::error;

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match RunConfig::load_json(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("failed to load {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => RunConfig::default(),
    };

    match train::run(&config) {
        Ok((_, stats, predictions)) => {
            println!(
                "Trained {} iterations: accuracy {:.1}%",
                stats.iterations,
                stats.accuracy * 100.0
            );
            for p in predictions {
                println!("Previsão {:?}: {} ({:.4})", p.inputs, p.label, p.score);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("training failed: {e}");
            ExitCode::FAILURE
        }
    }
}
