use clap::Parser;
use color_eyre::Result;

use questlog::cli::{self, Args};
use questlog::logging;

fn main() -> Result<()> {
  color_eyre::install()?;
  logging::init();

  let args = Args::parse();
  cli::run(args)
}
