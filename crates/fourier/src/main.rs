//! Fourier-rs: FFT transforms and polynomial multiplication from the command line.

use fourier_lib::{app, config, errors, logging};

fn main() {
    let config = config::AppConfig::parse();

    logging::init(config.verbose);

    if let Err(err) = app::run(&config) {
        fourier_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
