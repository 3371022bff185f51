use std::process::ExitCode;

use clap::Parser;
use glox_drv::error::{EX_SOFTWARE, EX_USAGE};
use glox_drv::{load_config, logging, Cli, DriverError};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EX_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        },
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let driver_error = e.downcast_ref::<DriverError>();
            if !driver_error.is_some_and(DriverError::is_reported) {
                eprintln!("error: {:#}", e);
            }
            ExitCode::from(driver_error.map_or(EX_SOFTWARE, DriverError::exit_code))
        },
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    logging::init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    glox_drv::run(cli, &config)?;

    Ok(())
}
