use clap::Parser;
use roman::app::{handle_fatal_error, init_logging};
use roman::cli::{generate_usage, run, Cli};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(&config);

    if cli.values.is_empty() {
        eprint!("{}", generate_usage());
        eprintln!();
        std::process::exit(2);
    }

    let stdout = std::io::stdout();
    let outcome = match run(&cli.values, config.capacity, &mut stdout.lock()) {
        Ok(outcome) => outcome,
        Err(e) => handle_fatal_error(e, config.verbose),
    };

    debug!("Finished with {:?}", outcome);
    std::process::exit(outcome.exit_code());
}
