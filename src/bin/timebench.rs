//! Timing benchmark for shell commands.
//!
//! Reads one shell command per line from a file (or stdin), runs each command
//! a fixed number of times with output discarded, and prints the average,
//! sample standard deviation, and standard error of the wall-clock durations.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::warn;

use topogen::bench::{read_commands, Summary};

#[derive(Parser, Debug)]
#[command(name = "timebench")]
#[command(about = "Measure average wall-clock time of shell commands")]
#[command(version)]
struct Args {
    /// Number of runs per command
    runs: u32,

    /// File with one shell command per line (defaults to stdin)
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let commands = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .wrap_err_with(|| format!("failed to open command file '{}'", path.display()))?;
            read_commands(BufReader::new(file))?
        }
        None => read_commands(io::stdin().lock())?,
    };

    for cmd in &commands {
        let mut samples = Vec::with_capacity(args.runs as usize);
        for _ in 0..args.runs {
            let start = Instant::now();
            let status = Command::new("sh")
                .arg("-c")
                .arg(cmd)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .wrap_err_with(|| format!("failed to run command '{}'", cmd))?;
            samples.push(start.elapsed().as_secs_f64());
            if !status.success() {
                warn!("command '{}' exited with {}", cmd, status);
            }
        }

        if let Some(summary) = Summary::from_samples(&samples) {
            println!("# {}", cmd);
            println!("average: {}", summary.average);
            println!("std: {}", summary.std);
            println!("stderr: {}", summary.stderr);
            println!();
        }
    }

    Ok(())
}
