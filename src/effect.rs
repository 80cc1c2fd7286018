use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  CancelTick,
  OpenUrl {
    url: String,
  },
  ScheduleTick {
    deck_index: usize,
    generation: u64,
    interval: Duration,
  },
}
