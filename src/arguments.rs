use super::*;

#[derive(Debug, Parser)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "Windowed, filterable, autoplaying card strips for the terminal")]
pub(crate) struct Arguments {
  /// Path to a catalog JSON file (uses the built-in sample when omitted)
  pub(crate) catalog: Option<PathBuf>,

  /// Override every deck's autoplay cadence, in milliseconds
  #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
  pub(crate) interval_ms: Option<u64>,

  /// Append tracing output to this file
  #[arg(long)]
  pub(crate) log_file: Option<PathBuf>,

  /// Start every deck with autoplay off
  #[arg(long)]
  pub(crate) no_autoplay: bool,
}
