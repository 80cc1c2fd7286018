use super::*;

/// Distinct categories in first-seen order. Uncategorized cards do not
/// contribute a chip.
pub(crate) fn categories<T: Categorized>(items: &[T]) -> Vec<String> {
  let mut seen = Vec::new();

  for item in items {
    if let Some(category) = item.category()
      && !seen.iter().any(|known: &String| known == category)
    {
      seen.push(category.to_string());
    }
  }

  seen
}

/// Indices of the items that survive the category filter, in source
/// order. `None` selects everything.
pub(crate) fn filtered_indices<T: Categorized>(
  items: &[T],
  category: Option<&str>,
) -> Vec<usize> {
  items
    .iter()
    .enumerate()
    .filter(|(_, item)| match category {
      None => true,
      Some(wanted) => item.category() == Some(wanted),
    })
    .map(|(index, _)| index)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Tagged(Option<&'static str>);

  impl Categorized for Tagged {
    fn category(&self) -> Option<&str> {
      self.0
    }
  }

  fn sample() -> Vec<Tagged> {
    vec![
      Tagged(Some("equipment")),
      Tagged(Some("supplements")),
      Tagged(Some("apparel")),
      Tagged(Some("equipment")),
      Tagged(None),
      Tagged(Some("apparel")),
    ]
  }

  #[test]
  fn no_category_returns_every_index_in_source_order() {
    let items = sample();

    assert_eq!(filtered_indices(&items, None), vec![0, 1, 2, 3, 4, 5]);
  }

  #[test]
  fn category_returns_matching_subsequence_in_relative_order() {
    let items = sample();

    assert_eq!(filtered_indices(&items, Some("equipment")), vec![0, 3]);
    assert_eq!(filtered_indices(&items, Some("apparel")), vec![2, 5]);
  }

  #[test]
  fn unknown_category_matches_nothing() {
    let items = sample();

    assert!(filtered_indices(&items, Some("nutrition")).is_empty());
  }

  #[test]
  fn uncategorized_items_only_appear_unfiltered() {
    let items = sample();

    let all = filtered_indices(&items, None);
    assert!(all.contains(&4));

    for category in ["equipment", "supplements", "apparel"] {
      assert!(!filtered_indices(&items, Some(category)).contains(&4));
    }
  }

  #[test]
  fn categories_are_unique_and_first_seen_ordered() {
    let items = sample();

    assert_eq!(
      categories(&items),
      vec!["equipment", "supplements", "apparel"]
    );
  }
}
