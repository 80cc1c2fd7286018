pub(crate) trait Categorized {
  fn category(&self) -> Option<&str>;
}
