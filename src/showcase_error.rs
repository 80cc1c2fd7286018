use super::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ShowcaseError {
  #[error("window {index} is out of range (last window is {max_index})")]
  OutOfRange { index: usize, max_index: usize },
}
