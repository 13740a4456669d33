use numbench::{bench_nbody, Parameters};

use clap::Parser;
use anyhow::Result;

use std::io;

#[derive(Parser, Debug)]
struct Args {
    /// Number of integration steps
    #[arg(short, default_value_t = 100_000)]
    steps: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let params = Parameters {
        steps: args.steps,
        ..Parameters::default()
    };

    let stdout = io::stdout();
    bench_nbody(&mut stdout.lock(), &params)?;

    Ok(())
}
