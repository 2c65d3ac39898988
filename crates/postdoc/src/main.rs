use std::process::ExitCode;

use clap::Parser;
use postdoc::cli::{init_logging, App, Args, Config};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let app = App::new(Config::from(&args));
    match app.run(std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // one line, outermost context first, each cause once
            eprintln!("error: {:#}", anyhow::Error::new(err));
            ExitCode::FAILURE
        }
    }
}
