use anyhow::Result;
use clap::Parser;
use std::io;

mod args;
mod inspect;

use args::Args;
use inspect::Config;

fn main() -> Result<()> {
    let args = Args::parse();
    let conf = Config::from_env();

    let buf = args.read_input(io::stdin().lock())?;

    let mut out = io::stdout().lock();
    if let Err(e) = inspect::inspect(&buf, &conf, args.exact, &mut out) {
        eprintln!("Inspection stopped at the first error.");
        return Err(e);
    }
    Ok(())
}
