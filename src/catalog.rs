use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Catalog {
  #[serde(default)]
  pub(crate) breakpoints: Option<Vec<Step>>,
  pub(crate) decks: Vec<DeckSpec>,
}

impl Catalog {
  pub(crate) fn load(path: &Path) -> Result<Self> {
    let data = fs::read(path)
      .with_context(|| format!("could not read catalog {}", path.display()))?;

    let catalog = serde_json::from_slice::<Self>(&data)
      .with_context(|| format!("could not parse catalog {}", path.display()))?;

    if catalog.decks.is_empty() {
      anyhow::bail!("catalog {} has no decks", path.display());
    }

    Ok(catalog)
  }

  pub(crate) fn sample() -> Self {
    fn card(
      id: &str,
      title: &str,
      blurb: &str,
      category: Option<&str>,
      price: Option<u64>,
      url: Option<&str>,
    ) -> Card {
      Card {
        blurb: blurb.to_string(),
        category: category.map(str::to_string),
        id: id.to_string(),
        price,
        title: title.to_string(),
        url: url.map(str::to_string),
      }
    }

    let products = DeckSpec {
      autoplay_ms: None,
      cards: vec![
        card(
          "p1",
          "Pro Dumbbell Set",
          "Rubber-coated pairs from 2 to 30 kg for free-weight work.",
          Some("equipment"),
          Some(299),
          Some("https://gym-gamma.example/shop/dumbbells"),
        ),
        card(
          "p2",
          "Premium Whey Protein",
          "Vanilla whey isolate, 1 kg tub.",
          Some("supplements"),
          Some(189),
          Some("https://gym-gamma.example/shop/whey"),
        ),
        card(
          "p3",
          "Dry-Fit Training Tee",
          "Breathable training shirt with the studio logo.",
          Some("apparel"),
          Some(89),
          Some("https://gym-gamma.example/shop/tee"),
        ),
        card(
          "p4",
          "Pro Yoga Mat",
          "High-density mat with a non-slip grip.",
          Some("equipment"),
          Some(129),
          Some("https://gym-gamma.example/shop/yoga-mat"),
        ),
        card(
          "p5",
          "Creatine Monohydrate",
          "300 g of creatine for strength and performance.",
          Some("supplements"),
          Some(149),
          Some("https://gym-gamma.example/shop/creatine"),
        ),
        card(
          "p6",
          "Training Shorts",
          "Light shorts built for intense sessions.",
          Some("apparel"),
          Some(119),
          Some("https://gym-gamma.example/shop/shorts"),
        ),
        card(
          "p7",
          "Shaker Bottle",
          "700 ml shaker with a mixing ball.",
          Some("accessories"),
          Some(49),
          Some("https://gym-gamma.example/shop/shaker"),
        ),
        card(
          "p8",
          "Lifting Gloves",
          "Padded gloves that keep calluses away.",
          Some("accessories"),
          Some(79),
          Some("https://gym-gamma.example/shop/gloves"),
        ),
      ],
      label: "products".to_string(),
      wrap: false,
    };

    let gallery = DeckSpec {
      autoplay_ms: None,
      cards: vec![
        card(
          "g1",
          "Free Weights Hall",
          "A full hall of free weights and professional racks.",
          Some("facilities"),
          None,
          Some("https://gym-gamma.example/gallery/weights-hall"),
        ),
        card(
          "g2",
          "Cardio Floor",
          "Treadmills, rowers and bikes on the upper floor.",
          Some("facilities"),
          None,
          Some("https://gym-gamma.example/gallery/cardio"),
        ),
        card(
          "g3",
          "Functional Zone",
          "Open space with rigs, sleds and accessories.",
          Some("facilities"),
          None,
          Some("https://gym-gamma.example/gallery/functional"),
        ),
        card(
          "g4",
          "Yossi Cohen",
          "Personal trainer, ten years of competition prep.",
          Some("trainers"),
          None,
          Some("https://gym-gamma.example/team/yossi"),
        ),
        card(
          "g5",
          "Michal Levi",
          "Personal trainer specializing in HIIT.",
          Some("trainers"),
          None,
          Some("https://gym-gamma.example/team/michal"),
        ),
        card(
          "g6",
          "Danny, Before & After",
          "15 kg down in six months.",
          Some("transformations"),
          None,
          None,
        ),
        card(
          "g7",
          "Ronit, Before & After",
          "Strength gains and visible muscle growth.",
          Some("transformations"),
          None,
          None,
        ),
        card(
          "g8",
          "Yoga & Pilates Studio",
          "A quiet studio for group classes.",
          Some("facilities"),
          None,
          Some("https://gym-gamma.example/gallery/studio"),
        ),
      ],
      label: "gallery".to_string(),
      wrap: false,
    };

    let testimonials = DeckSpec {
      autoplay_ms: Some(5000),
      cards: vec![
        card(
          "t1",
          "Daniel Cohen",
          "Lost 15 kilos in half a year thanks to the personal coaching.",
          None,
          None,
          None,
        ),
        card(
          "t2",
          "Michal Levi",
          "Came in with chronic back pain; today I feel better than ever.",
          None,
          None,
          None,
        ),
        card(
          "t3",
          "Alon Barak",
          "The personal program got me to results I never dreamed of.",
          None,
          None,
          None,
        ),
        card(
          "t4",
          "Shira Avraham",
          "The perfect place to get back in shape after giving birth.",
          None,
          None,
          None,
        ),
        card(
          "t5",
          "Yossi Mizrahi",
          "At 65 the trainers proved it is never too late to improve.",
          None,
          None,
          None,
        ),
        card(
          "t6",
          "Noa Shalom",
          "The group sessions make you want to train more and more.",
          None,
          None,
          None,
        ),
      ],
      label: "testimonials".to_string(),
      wrap: true,
    };

    Self {
      breakpoints: None,
      decks: vec![products, gallery, testimonials],
    }
  }
}
