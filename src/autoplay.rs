use super::*;

/// Cadence state for one deck. The timer itself lives in `App` as an
/// abortable task; every transition here bumps `generation` so a tick
/// that was already in flight when the timer was cancelled is discarded
/// on arrival instead of advancing the strip twice.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Autoplay {
  enabled: bool,
  generation: u64,
  interval: Duration,
  suspended: bool,
}

impl Autoplay {
  fn bump(&mut self) {
    self.generation = self.generation.wrapping_add(1);
  }

  pub(crate) fn generation(&self) -> u64 {
    self.generation
  }

  pub(crate) fn interval(&self) -> Duration {
    self.interval
  }

  pub(crate) fn is_enabled(&self) -> bool {
    self.enabled
  }

  pub(crate) fn is_running(&self) -> bool {
    self.enabled && !self.suspended
  }

  pub(crate) fn matches(&self, generation: u64) -> bool {
    self.is_running() && generation == self.generation
  }

  pub(crate) fn new(interval: Duration, enabled: bool) -> Self {
    Self {
      enabled,
      generation: 0,
      interval,
      suspended: false,
    }
  }

  /// Lifts a suspension. Returns whether a fresh timer should be
  /// scheduled; the elapsed part of the cancelled interval is not
  /// carried over.
  pub(crate) fn resume(&mut self) -> bool {
    self.suspended = false;
    self.bump();

    self.is_running()
  }

  pub(crate) fn suspend(&mut self) {
    self.suspended = true;
    self.bump();
  }

  /// Explicit on/off switch. Returns the new enabled state.
  pub(crate) fn toggle(&mut self) -> bool {
    self.enabled = !self.enabled;
    self.bump();

    self.enabled
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn five_seconds() -> Duration {
    Duration::from_millis(5000)
  }

  #[test]
  fn suspension_invalidates_the_outstanding_generation() {
    let mut autoplay = Autoplay::new(five_seconds(), true);

    let scheduled = autoplay.generation();
    assert!(autoplay.matches(scheduled));

    autoplay.suspend();

    assert!(!autoplay.matches(scheduled));
    assert!(!autoplay.is_running());
  }

  #[test]
  fn resume_schedules_under_a_new_generation() {
    let mut autoplay = Autoplay::new(five_seconds(), true);

    let before = autoplay.generation();

    autoplay.suspend();
    assert!(autoplay.resume());

    assert!(autoplay.is_running());
    assert!(!autoplay.matches(before));
    assert!(autoplay.matches(autoplay.generation()));
  }

  #[test]
  fn resume_does_not_revive_an_explicitly_disabled_deck() {
    let mut autoplay = Autoplay::new(five_seconds(), true);

    assert!(!autoplay.toggle());

    autoplay.suspend();
    assert!(!autoplay.resume());
    assert!(!autoplay.is_running());
  }

  #[test]
  fn toggle_flips_enabled_and_invalidates_old_ticks() {
    let mut autoplay = Autoplay::new(five_seconds(), false);

    assert!(!autoplay.is_running());

    let stale = autoplay.generation();

    assert!(autoplay.toggle());
    assert!(autoplay.is_running());
    assert!(!autoplay.matches(stale));
  }
}
