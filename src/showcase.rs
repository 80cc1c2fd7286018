use super::*;

/// One carousel instance: the immutable card list, the category filter
/// projected onto it, and the window into the filtered view. Instances
/// are independent; nothing here is shared between decks.
pub(crate) struct Showcase<T> {
  category: Option<String>,
  filtered: Vec<usize>,
  items: Vec<T>,
  window: Window,
}

impl<T: Categorized> Showcase<T> {
  pub(crate) fn advance(&mut self) -> bool {
    self.window.advance()
  }

  pub(crate) fn can_advance(&self) -> bool {
    self.window.can_advance()
  }

  pub(crate) fn can_retreat(&self) -> bool {
    self.window.can_retreat()
  }

  pub(crate) fn categories(&self) -> Vec<String> {
    filter::categories(&self.items)
  }

  pub(crate) fn category(&self) -> Option<&str> {
    self.category.as_deref()
  }

  pub(crate) fn cycle_category(&mut self, backward: bool) {
    let categories = self.categories();

    if categories.is_empty() {
      return;
    }

    let position = self
      .category
      .as_ref()
      .and_then(|current| categories.iter().position(|c| c == current));

    let next = if backward {
      match position {
        None => categories.last().cloned(),
        Some(0) => None,
        Some(p) => categories.get(p - 1).cloned(),
      }
    } else {
      match position {
        None => categories.first().cloned(),
        Some(p) => categories.get(p + 1).cloned(),
      }
    };

    self.select_category(next);
  }

  pub(crate) fn filtered_len(&self) -> usize {
    self.filtered.len()
  }

  pub(crate) fn go_to(&mut self, index: usize) -> Result<(), ShowcaseError> {
    self.window.go_to(index)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.filtered.is_empty()
  }

  pub(crate) fn new(items: Vec<T>, edge: EdgeBehavior, visible: usize) -> Self {
    let filtered = filter::filtered_indices(&items, None);
    let window = Window::new(filtered.len(), visible, edge);

    Self {
      category: None,
      filtered,
      items,
      window,
    }
  }

  pub(crate) fn retreat(&mut self) -> bool {
    self.window.retreat()
  }

  /// Replaces the filter. The old window index was computed against a
  /// different filtered set, so it is always discarded, not clamped.
  pub(crate) fn select_category(&mut self, category: Option<String>) {
    self.category = category;
    self.filtered =
      filter::filtered_indices(&self.items, self.category.as_deref());

    self.window.set_len(self.filtered.len());
    self.window.rewind();
  }

  pub(crate) fn set_visible_count(&mut self, visible: usize) {
    self.window.set_visible_count(visible);
  }

  pub(crate) fn visible_cards(&self) -> Vec<&T> {
    let start = self.window.index().min(self.filtered.len());
    let end = (start + self.window.visible_count()).min(self.filtered.len());

    self.filtered[start..end]
      .iter()
      .filter_map(|&index| self.items.get(index))
      .collect()
  }

  pub(crate) fn visible_count(&self) -> usize {
    self.window.visible_count()
  }

  pub(crate) fn window_count(&self) -> usize {
    self.window.window_count()
  }

  pub(crate) fn window_index(&self) -> usize {
    self.window.index()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn product(id: &str, category: &str) -> Card {
    Card {
      blurb: format!("Blurb for {id}"),
      category: Some(category.to_string()),
      id: id.to_string(),
      price: None,
      title: format!("Product {id}"),
      url: None,
    }
  }

  fn eight_products() -> Vec<Card> {
    vec![
      product("1", "equipment"),
      product("2", "supplements"),
      product("3", "apparel"),
      product("4", "equipment"),
      product("5", "supplements"),
      product("6", "apparel"),
      product("7", "accessories"),
      product("8", "accessories"),
    ]
  }

  fn visible_ids(showcase: &Showcase<Card>) -> Vec<String> {
    showcase
      .visible_cards()
      .iter()
      .map(|card| card.id.clone())
      .collect()
  }

  #[test]
  fn five_clicks_reach_the_last_window_and_the_sixth_is_ignored() {
    let mut showcase =
      Showcase::new(eight_products(), EdgeBehavior::Clamp, 3);

    for _ in 0..5 {
      assert!(showcase.advance());
    }

    assert_eq!(showcase.window_index(), 5);
    assert_eq!(visible_ids(&showcase), vec!["6", "7", "8"]);

    assert!(!showcase.advance());
    assert_eq!(showcase.window_index(), 5);
  }

  #[test]
  fn narrowing_the_viewport_keeps_a_still_valid_index() {
    let mut showcase =
      Showcase::new(eight_products(), EdgeBehavior::Clamp, 3);

    showcase.go_to(5).expect("5 is in range");
    showcase.set_visible_count(1);

    assert_eq!(showcase.window_index(), 5);
    assert_eq!(showcase.window_count(), 8);
    assert_eq!(visible_ids(&showcase), vec!["6"]);
  }

  #[test]
  fn filtering_down_to_two_cards_resets_rather_than_clamps() {
    let mut showcase =
      Showcase::new(eight_products(), EdgeBehavior::Clamp, 3);

    showcase.go_to(5).expect("5 is in range");
    showcase.select_category(Some("accessories".to_string()));

    assert_eq!(showcase.filtered_len(), 2);
    assert_eq!(showcase.window_index(), 0);
    assert_eq!(showcase.window_count(), 1);
    assert_eq!(visible_ids(&showcase), vec!["7", "8"]);
  }

  #[test]
  fn every_filter_change_starts_back_at_the_first_window() {
    let mut showcase =
      Showcase::new(eight_products(), EdgeBehavior::Clamp, 1);

    showcase.advance();
    showcase.select_category(Some("equipment".to_string()));
    assert_eq!(showcase.window_index(), 0);

    showcase.advance();
    showcase.select_category(None);
    assert_eq!(showcase.window_index(), 0);
  }

  #[test]
  fn unmatched_filter_renders_a_defined_empty_state() {
    let mut showcase =
      Showcase::new(eight_products(), EdgeBehavior::Clamp, 3);

    showcase.select_category(Some("nutrition".to_string()));

    assert!(showcase.is_empty());
    assert!(visible_ids(&showcase).is_empty());
    assert!(!showcase.advance());
    assert_eq!(showcase.window_index(), 0);
  }

  #[test]
  fn trailing_window_may_be_partial() {
    let mut showcase =
      Showcase::new(eight_products(), EdgeBehavior::Clamp, 3);

    showcase.select_category(Some("equipment".to_string()));
    showcase.set_visible_count(3);

    assert_eq!(visible_ids(&showcase), vec!["1", "4"]);
  }

  #[test]
  fn cycle_walks_all_categories_and_returns_to_everything() {
    let mut showcase =
      Showcase::new(eight_products(), EdgeBehavior::Clamp, 3);

    let mut seen = Vec::new();

    for _ in 0..4 {
      showcase.cycle_category(false);
      seen.push(showcase.category().map(str::to_string));
    }

    assert_eq!(
      seen,
      vec![
        Some("equipment".to_string()),
        Some("supplements".to_string()),
        Some("apparel".to_string()),
        Some("accessories".to_string()),
      ]
    );

    showcase.cycle_category(false);
    assert_eq!(showcase.category(), None);

    showcase.cycle_category(true);
    assert_eq!(showcase.category(), Some("accessories"));
  }

  #[test]
  fn wrap_mode_cycles_through_every_window() {
    let mut showcase = Showcase::new(
      eight_products().into_iter().take(6).collect(),
      EdgeBehavior::Wrap,
      3,
    );

    for _ in 0..showcase.window_count() {
      showcase.advance();
    }

    assert_eq!(showcase.window_index(), 0);
  }
}
