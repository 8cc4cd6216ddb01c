use clap::Parser;
use mp_influx::cli::{self, Args};
use mp_influx::logging;
use mp_influx::shared::config::load_settings;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut settings = match load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    args.apply_to(&mut settings);

    if let Err(e) = logging::init(&settings.logging) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match cli::run(&args, &settings).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            e.log_error();
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
