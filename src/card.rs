use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Card {
  pub(crate) blurb: String,
  #[serde(default)]
  pub(crate) category: Option<String>,
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) price: Option<u64>,
  pub(crate) title: String,
  #[serde(default)]
  pub(crate) url: Option<String>,
}

impl Categorized for Card {
  fn category(&self) -> Option<&str> {
    self.category.as_deref()
  }
}

impl Card {
  pub(crate) fn price_label(&self) -> Option<String> {
    self.price.map(format_price)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn optional_fields_default_to_none() {
    let card: Card = serde_json::from_str(
      r#"{"id": "t1", "title": "Daniel Cohen", "blurb": "Lost 15 kilos."}"#,
    )
    .expect("minimal card parses");

    assert_eq!(card.category, None);
    assert_eq!(card.price, None);
    assert_eq!(card.url, None);
    assert_eq!(card.price_label(), None);
  }

  #[test]
  fn full_card_round_trips_every_field() {
    let card: Card = serde_json::from_str(
      r#"{
        "id": "p1",
        "title": "Pro Dumbbell Set",
        "blurb": "Rubber-coated pairs from 2 to 30 kg.",
        "category": "equipment",
        "price": 299,
        "url": "https://gym.example/shop/dumbbells"
      }"#,
    )
    .expect("full card parses");

    assert_eq!(card.category(), Some("equipment"));
    assert_eq!(card.price_label().as_deref(), Some("₪299"));
    assert_eq!(card.url.as_deref(), Some("https://gym.example/shop/dumbbells"));
  }
}
