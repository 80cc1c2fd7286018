use super::*;

/// Offset of the visible slice into a filtered collection. The index is
/// always in `[0, max_index]`, with `max_index = len - visible` floored
/// at zero, so a trailing window may be shorter than `visible` but never
/// starts past the end.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Window {
  edge: EdgeBehavior,
  index: usize,
  len: usize,
  visible: usize,
}

impl Window {
  pub(crate) fn advance(&mut self) -> bool {
    if !self.can_advance() {
      return false;
    }

    self.index = match self.edge {
      EdgeBehavior::Clamp => self.index + 1,
      EdgeBehavior::Wrap => (self.index + 1) % self.window_count(),
    };

    true
  }

  pub(crate) fn can_advance(&self) -> bool {
    match self.edge {
      EdgeBehavior::Clamp => !self.is_at_end(),
      EdgeBehavior::Wrap => self.max_index() > 0,
    }
  }

  pub(crate) fn can_retreat(&self) -> bool {
    match self.edge {
      EdgeBehavior::Clamp => !self.is_at_start(),
      EdgeBehavior::Wrap => self.max_index() > 0,
    }
  }

  pub(crate) fn go_to(&mut self, index: usize) -> Result<(), ShowcaseError> {
    let max_index = self.max_index();

    if index > max_index {
      return Err(ShowcaseError::OutOfRange { index, max_index });
    }

    self.index = index;

    Ok(())
  }

  pub(crate) fn index(&self) -> usize {
    self.index
  }

  pub(crate) fn is_at_end(&self) -> bool {
    self.index >= self.max_index()
  }

  pub(crate) fn is_at_start(&self) -> bool {
    self.index == 0
  }

  pub(crate) fn max_index(&self) -> usize {
    self.len.saturating_sub(self.visible)
  }

  pub(crate) fn new(len: usize, visible: usize, edge: EdgeBehavior) -> Self {
    Self {
      edge,
      index: 0,
      len,
      visible: visible.max(1),
    }
  }

  pub(crate) fn retreat(&mut self) -> bool {
    if !self.can_retreat() {
      return false;
    }

    self.index = match self.edge {
      EdgeBehavior::Clamp => self.index - 1,
      EdgeBehavior::Wrap => {
        (self.index + self.max_index()) % self.window_count()
      }
    };

    true
  }

  pub(crate) fn rewind(&mut self) {
    self.index = 0;
  }

  pub(crate) fn set_len(&mut self, len: usize) {
    self.len = len;
    self.index = self.index.min(self.max_index());
  }

  pub(crate) fn set_visible_count(&mut self, visible: usize) {
    self.visible = visible.max(1);
    self.index = self.index.min(self.max_index());
  }

  pub(crate) fn visible_count(&self) -> usize {
    self.visible
  }

  pub(crate) fn window_count(&self) -> usize {
    self.max_index() + 1
  }
}
