use anyhow::Context;
use clap::{CommandFactory, Parser, ValueEnum};
use code2art::{EmptyPolicy, RasterConfig};
use std::path::PathBuf;

/// Turn a text file into black-and-white pixel art, one pixel per character.
#[derive(Parser, Debug)]
#[command(name = "code2art", version, about)]
struct Cli {
    /// Text file to convert
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Directory for the PNG (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Rendering threads (0 = one per CPU)
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// What to do when the input has no visible area
    #[arg(long, value_enum, default_value_t = EmptyArg::Reject)]
    empty: EmptyArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EmptyArg {
    Reject,
    Placeholder,
}

impl From<EmptyArg> for EmptyPolicy {
    fn from(a: EmptyArg) -> Self {
        match a {
            EmptyArg::Reject => EmptyPolicy::Reject,
            EmptyArg::Placeholder => EmptyPolicy::Placeholder,
        }
    }
}

fn run(file: PathBuf, cli: &Cli) -> anyhow::Result<()> {
    let output_dir = match &cli.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    let config = RasterConfig {
        threads: cli.jobs,
        empty_policy: cli.empty.into(),
    };

    let done = code2art::convert_file(&file, &output_dir, &config)
        .with_context(|| format!("converting {}", file.display()))?;

    println!(
        "Wrote ({}, {}) PNG image to {}",
        done.written.width,
        done.written.height,
        done.output.display()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let Some(file) = cli.file.clone() else {
        eprintln!("Need at least one filename argument.");
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    if let Err(e) = run(file, &cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
