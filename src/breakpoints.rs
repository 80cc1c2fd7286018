use super::*;

#[derive(Clone, Copy, Debug, Deserialize)]
pub(crate) struct Step {
  pub(crate) count: usize,
  pub(crate) min_width: u16,
}

/// Width-to-card-count policy for a strip. Steps are kept sorted by
/// `min_width`; the widest step at or below the current width wins.
#[derive(Clone, Debug)]
pub(crate) struct Breakpoints {
  steps: Vec<Step>,
}

impl Default for Breakpoints {
  fn default() -> Self {
    Self::new(vec![
      Step {
        count: 1,
        min_width: 0,
      },
      Step {
        count: 2,
        min_width: 80,
      },
      Step {
        count: 3,
        min_width: 120,
      },
    ])
  }
}

impl Breakpoints {
  pub(crate) fn new(mut steps: Vec<Step>) -> Self {
    steps.retain(|step| step.count >= 1);
    steps.sort_by_key(|step| step.min_width);

    Self { steps }
  }

  pub(crate) fn visible_count(&self, width: u16) -> usize {
    self
      .steps
      .iter()
      .rev()
      .find(|step| step.min_width <= width)
      .map_or(1, |step| step.count)
  }
}
