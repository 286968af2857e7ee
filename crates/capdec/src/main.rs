use std::io;

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};

mod app;
mod cli;

use cli::{Args, CliError};

fn main() {
    match capdec() {
        Ok(()) => {}
        Err(cli_error) => cli_error.exit(),
    }
}

fn capdec() -> Result<(), CliError> {
    // Parse options and start logging
    let args = Args::try_parse()?;
    log_setup(&args);

    // file setup: locks stdin in case we need it
    let stdin = io::stdin();
    let stdin_handle = stdin.lock();
    let inbuf: Box<dyn io::BufRead> = if args.demo {
        // demo mode generates its own document
        Box::new(io::empty())
    } else {
        file_setup(&args, stdin_handle)?
    };

    app::run(&args, inbuf)?;

    Ok(())
}

fn log_setup(args: &Args) {
    if args.quiet {
        // no logging
        return;
    } else if std::env::var_os("RUST_LOG").is_none() {
        // parameter controls
        let log_filter = match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        pretty_env_logger::formatted_builder()
            .filter_module("capwire", log_filter)
            .filter_module("capgeo", log_filter)
            .filter_module("capdec", log_filter)
            .init();
    } else {
        // environment controls
        pretty_env_logger::init();
    }
}

fn file_setup(
    args: &Args,
    stdin: io::StdinLock<'static>,
) -> Result<Box<dyn io::BufRead>, anyhow::Error> {
    if args.input_is_stdin() {
        info!("CAP decoder reading standard input");
        Ok(Box::new(io::BufReader::new(stdin)))
    } else {
        info!("CAP decoder reading file: \"{}\"", &args.file);
        Ok(Box::new(io::BufReader::new(
            std::fs::File::open(&args.file)
                .with_context(|| format!("Unable to open --file \"{}\"", args.file))?,
        )))
    }
}
