use super::*;

pub(crate) struct Deck {
  pub(crate) autoplay: Autoplay,
  pub(crate) label: String,
  pub(crate) showcase: Showcase<Card>,
}

impl Deck {
  pub(crate) fn new(
    spec: DeckSpec,
    visible: usize,
    interval_override: Option<Duration>,
    autoplay_allowed: bool,
  ) -> Self {
    let interval = interval_override
      .or_else(|| spec.autoplay_ms.map(Duration::from_millis))
      .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL);

    let enabled = autoplay_allowed && spec.autoplay_ms.is_some();

    let edge = EdgeBehavior::from_wrap(spec.wrap);

    Self {
      autoplay: Autoplay::new(interval, enabled),
      label: spec.label,
      showcase: Showcase::new(spec.cards, edge, visible),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn spec(autoplay_ms: Option<u64>) -> DeckSpec {
    DeckSpec {
      autoplay_ms,
      cards: Vec::new(),
      label: "specials".to_string(),
      wrap: true,
    }
  }

  #[test]
  fn autoplay_runs_only_when_the_deck_asks_for_it() {
    let with = Deck::new(spec(Some(2500)), 3, None, true);
    assert!(with.autoplay.is_running());
    assert_eq!(with.autoplay.interval(), Duration::from_millis(2500));

    let without = Deck::new(spec(None), 3, None, true);
    assert!(!without.autoplay.is_running());
  }

  #[test]
  fn no_autoplay_flag_wins_over_the_deck() {
    let deck = Deck::new(spec(Some(2500)), 3, None, false);

    assert!(!deck.autoplay.is_running());
  }

  #[test]
  fn interval_override_replaces_the_configured_cadence() {
    let deck =
      Deck::new(spec(Some(2500)), 3, Some(Duration::from_millis(800)), true);

    assert_eq!(deck.autoplay.interval(), Duration::from_millis(800));
  }
}
