//! Banger catalog
//!
//! The quotes the wheel hands out. A spin outcome only says "rare or not";
//! the catalog turns that into an actual banger.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::wheel::SpinOutcome;
use crate::{Error, Result};

/// Bundled catalog
const BUILTIN_BANGERS: &str = include_str!("bangers.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fundraising,
    Grit,
    Growth,
    Mindset,
    Startup,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fundraising => "fundraising",
            Category::Grit => "grit",
            Category::Growth => "growth",
            Category::Mindset => "mindset",
            Category::Startup => "startup",
            Category::General => "general",
        }
    }
}

/// A single quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banger {
    pub id: String,
    pub text: String,
    pub category: Category,
    #[serde(default)]
    pub is_rare: bool,
    /// ISO date (YYYY-MM-DD)
    pub date_added: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// Non-empty, ordered list of bangers
#[derive(Debug, Clone)]
pub struct BangerCatalog {
    bangers: Vec<Banger>,
}

impl BangerCatalog {
    pub fn new(bangers: Vec<Banger>) -> Result<Self> {
        if bangers.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self { bangers })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_BANGERS)
    }

    pub fn len(&self) -> usize {
        self.bangers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bangers.is_empty()
    }

    pub fn bangers(&self) -> &[Banger] {
        &self.bangers
    }

    pub fn by_id(&self, id: &str) -> Option<&Banger> {
        self.bangers.iter().find(|b| b.id == id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Banger> {
        self.bangers.iter().filter(move |b| b.category == category)
    }

    pub fn rare_count(&self) -> usize {
        self.bangers.iter().filter(|b| b.is_rare).count()
    }

    /// Banger of the day; cycles through the catalog by day of year
    pub fn todays_banger(&self, day_of_year: u32) -> &Banger {
        &self.bangers[day_of_year as usize % self.bangers.len()]
    }

    pub fn random_banger<R: Rng>(&self, rng: &mut R) -> &Banger {
        &self.bangers[rng.random_range(0..self.bangers.len())]
    }

    /// Random rare banger, or any banger if the catalog has no rare ones
    pub fn rare_banger<R: Rng>(&self, rng: &mut R) -> &Banger {
        let rare: Vec<&Banger> = self.bangers.iter().filter(|b| b.is_rare).collect();
        if rare.is_empty() {
            return self.random_banger(rng);
        }
        rare[rng.random_range(0..rare.len())]
    }

    /// Pick the reward for a completed spin
    pub fn for_outcome<R: Rng>(&self, outcome: SpinOutcome, rng: &mut R) -> &Banger {
        if outcome.rare {
            self.rare_banger(rng)
        } else {
            self.random_banger(rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn banger(id: &str, is_rare: bool) -> Banger {
        Banger {
            id: id.to_string(),
            text: format!("banger {id}"),
            category: Category::General,
            is_rare,
            date_added: "2024-01-01".to_string(),
            audio_url: None,
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = BangerCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.rare_count(), 3);
        assert_eq!(catalog.by_category(Category::Startup).count(), 5);
        let first = catalog.by_id("1").unwrap();
        assert!(first.audio_url.is_some());
        assert!(!first.is_rare);
        assert!(catalog.by_id("11").unwrap().is_rare);
    }

    #[test]
    fn test_todays_banger_cycles() {
        let catalog = BangerCatalog::builtin().unwrap();
        assert_eq!(catalog.todays_banger(0).id, "1");
        assert_eq!(catalog.todays_banger(21).id, "2");
        assert_eq!(catalog.todays_banger(19).id, "20");
    }

    #[test]
    fn test_rare_outcome_gets_rare_banger() {
        let catalog = BangerCatalog::builtin().unwrap();
        let mut rng = Pcg32::seed_from_u64(12345);
        let rare = SpinOutcome { panel: 1, rare: true };
        for _ in 0..50 {
            assert!(catalog.for_outcome(rare, &mut rng).is_rare);
        }
    }

    #[test]
    fn test_rare_falls_back_to_any() {
        let catalog = BangerCatalog::new(vec![banger("a", false), banger("b", false)]).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        let picked = catalog.rare_banger(&mut rng);
        assert!(picked.id == "a" || picked.id == "b");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(BangerCatalog::new(Vec::new()), Err(Error::EmptyCatalog)));
        assert!(matches!(BangerCatalog::from_json("[]"), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_serde_field_names() {
        let json = r#"[{ "id": "x", "text": "t", "category": "grit", "isRare": true, "dateAdded": "2024-02-02" }]"#;
        let catalog = BangerCatalog::from_json(json).unwrap();
        let b = &catalog.bangers()[0];
        assert_eq!(b.category, Category::Grit);
        assert!(b.is_rare);
        assert_eq!(b.audio_url, None);
        let out = serde_json::to_string(b).unwrap();
        assert!(out.contains("\"dateAdded\""));
        assert!(!out.contains("audioUrl"));
    }
}
