use clap::Parser;

/// Default log filter when none is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "cgi-urldecode", version, about = "Percent-decode query strings and form values")]
pub struct Cli {
	/// Encoded values to decode (reads stdin lines when empty)
	pub inputs: Vec<String>,

	/// Log level (error, warn, info, debug, trace)
	#[arg(long, env = "URLDECODE_LOG", default_value = DEFAULT_LOG_LEVEL)]
	pub log_level: String,
}
