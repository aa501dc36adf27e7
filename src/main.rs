mod config;

use std::io;
use std::io::prelude::*;

use clap::Parser;

use cgi_urldecode::decode;
use config::Cli;
use config::DEFAULT_LOG_LEVEL;

fn write_decoded<W: Write>(out: &mut W, input: &[u8]) -> io::Result<()> {
	out.write_all(&decode(input))?;
	out.write_all(b"\n")
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let env_filter = tracing_subscriber::EnvFilter::try_new(&cli.log_level)
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_LEVEL));
	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(io::stderr)
		.init();

	let stdout = io::stdout();
	let mut out = stdout.lock();
	if cli.inputs.is_empty() {
		tracing::debug!("reading values from stdin");
		for line in io::stdin().lock().split(b'\n') {
			let mut line = line?;
			if line.last() == Some(&b'\r') {
				line.pop();
			}
			write_decoded(&mut out, &line)?;
		}
	} else {
		for input in &cli.inputs {
			write_decoded(&mut out, input.as_bytes())?;
		}
	}
	out.flush()?;
	Ok(())
}
