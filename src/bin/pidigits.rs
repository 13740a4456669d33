use numbench::bench_pi_digit;

use clap::Parser;
use anyhow::Result;

use std::io;

#[derive(Parser, Debug)]
struct Args {
    /// Digit position to compute (the leading 3 is digit 1)
    #[arg(short, default_value_t = 10_000)]
    digits: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let stdout = io::stdout();
    bench_pi_digit(&mut stdout.lock(), args.digits)?;

    Ok(())
}
