#[derive(Clone, Copy, Debug)]
pub(crate) enum Event {
  AutoplayTick { deck_index: usize, generation: u64 },
}
