use super::*;

/// Routes tracing output to a file; stdout belongs to the terminal UI.
/// Respects `RUST_LOG`, defaulting to `info`.
pub(crate) fn init(log_path: &Path) -> Result {
  let Some(file_name) = log_path.file_name() else {
    anyhow::bail!("log path {} has no file name", log_path.display());
  };

  let directory = match log_path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => PathBuf::from("."),
  };

  fs::create_dir_all(&directory).with_context(|| {
    format!("could not create log directory {}", directory.display())
  })?;

  let appender = tracing_appender::rolling::never(&directory, file_name);

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(appender)
    .with_ansi(false)
    .try_init()
    .map_err(|error| {
      anyhow::anyhow!("could not install tracing subscriber: {error}")
    })?;

  Ok(())
}
