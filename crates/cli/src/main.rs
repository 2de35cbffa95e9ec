use std::process::ExitCode;

fn main() -> ExitCode {
    theater_observability::init();

    let config = match theater_cli::config::Config::from_env(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            eprintln!("{}", theater_cli::config::USAGE);
            return ExitCode::from(2);
        }
    };

    match theater_cli::run(&config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "statement generation failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
