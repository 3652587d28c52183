#![deny(missing_debug_implementations)]

pub mod cli;
pub mod report;

use clap::Parser;
use cli::Options;
use prelude_plus::*;

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  if let Err(err) = try_main() {
    error!("{:?}", err);
    std::process::exit(1);
  }
}

fn try_main() -> AnyResult<()> {
  let options = Options::parse();
  debug!("{:?}", options);

  let stdout = io::stdout();
  let mut out = BufWriter::new(stdout.lock());

  if options.literals.is_empty() {
    info!("Reading literals from stdin");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
      let line = line.context("Failed to read stdin")?;
      if line.trim().is_empty() {
        continue;
      }
      writeln!(out, "{}", report::render(&line, options.channel_type, options.json)?)?;
    }
  } else {
    for literal in &options.literals {
      writeln!(out, "{}", report::render(literal, options.channel_type, options.json)?)?;
    }
  }

  out.flush().context("Failed to write to stdout")?;
  Ok(())
}
