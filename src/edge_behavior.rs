#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EdgeBehavior {
  Clamp,
  Wrap,
}

impl EdgeBehavior {
  pub(crate) fn from_wrap(wrap: bool) -> Self {
    if wrap { Self::Wrap } else { Self::Clamp }
  }
}
