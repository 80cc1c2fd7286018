use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct DeckSpec {
  #[serde(default)]
  pub(crate) autoplay_ms: Option<u64>,
  pub(crate) cards: Vec<Card>,
  pub(crate) label: String,
  #[serde(default)]
  pub(crate) wrap: bool,
}
