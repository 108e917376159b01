use clap::Parser;
use gosh::config::{Args, ShellConfig};
use gosh::{app, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShellConfig::from_args(Args::parse())?;
    logging::init(&config.log_path);

    // Runs until `exit` or end of input; the terminal is restored on every path out
    app::run(config)?;

    Ok(())
}
