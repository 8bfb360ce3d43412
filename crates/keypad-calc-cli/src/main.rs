//! keypad-calc: keypad calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc press 12+3 =           # Press keys, print the display
//! keypad-calc press --trace 2*3=     # One line per key
//! keypad-calc eval --strict '(1+2)*3' # Type an expression and press =
//! keypad-calc keypad                 # Show the keypad layout
//! keypad-calc interactive            # Drive the keypad in the terminal
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use keypad_calc::engine::CalculatorEngine;
use keypad_calc_cli::{handlers, logging, view, Cli, CliConfig, CliResult, Commands};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = CliConfig::resolve(&cli)?;
    config.color.apply();
    logging::init(config.verbosity, config.log_format)?;
    debug!(?config, "configuration resolved");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Press(args) => handlers::execute_press(&mut stdout, &config, &args),
        Commands::Eval(args) => handlers::execute_eval(&mut stdout, &config, &args),
        Commands::Keypad => handlers::execute_keypad(&mut stdout),
        Commands::Config => handlers::execute_config(&mut stdout, &config),
        Commands::Interactive => {
            drop(stdout);
            view::run(CalculatorEngine::with_config(config.engine))
        }
    }
}
