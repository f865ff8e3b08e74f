use std::ffi::OsString;
use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fpb::{Config, Supervisor};

/// FFmpeg Progress Bar - runs ffmpeg with a live progress bar
///
/// Every argument is passed to ffmpeg unchanged.
#[derive(Parser, Debug)]
#[command(name = "fpb", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Arguments for ffmpeg
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn run(args: &[OsString]) -> Result<i32> {
    let outcome = Supervisor::for_terminal(Config::default()).run(args, io::stderr())?;
    Ok(outcome.exit_code())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.args.is_empty() {
        eprintln!("Usage: fpb <ffmpeg-args>");
        process::exit(1);
    }

    let code = match run(&cli.args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            1
        }
    };
    process::exit(code);
}
