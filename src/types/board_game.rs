use serde::{Deserialize, Serialize};

/// A single game as returned by the search endpoint.
///
/// Equality and hashing cover every field, so two records built from the
/// same API entry are interchangeable as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardGame {
    pub name: String,
    pub year_published: i32,
    pub min_players: i32,
    pub max_players: i32,
    pub min_playtime: i32,
    pub max_playtime: i32,
    pub thumb_url: String,
    pub image_url: String,
    pub rank: i32,
    pub description: String,
}

impl BoardGame {
    /// Whether the game supports every player count in `min..=max`.
    pub fn supports_players(&self, min: i32, max: i32) -> bool {
        self.min_players <= min && self.max_players >= max
    }

    pub fn fits_within(&self, minutes: i32) -> bool {
        self.max_playtime <= minutes
    }
}

/// A game with its category ids resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub game: BoardGame,
    pub categories: Vec<String>,
}

impl CatalogEntry {
    pub fn has_category(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.categories.iter().any(|c| c.to_lowercase() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn catan() -> BoardGame {
        BoardGame {
            name: "Catan".into(),
            year_published: 1995,
            min_players: 3,
            max_players: 4,
            min_playtime: 60,
            max_playtime: 120,
            thumb_url: "t".into(),
            image_url: "i".into(),
            rank: 5,
            description: "d".into(),
        }
    }

    #[test]
    fn test_structural_identity() {
        let mut map = HashMap::new();
        map.insert(catan(), vec!["101".to_string()]);
        map.insert(catan(), vec!["102".to_string()]);

        assert_eq!(map.len(), 1);
        assert_eq!(map[&catan()], vec!["102"]);

        let reranked = BoardGame { rank: 6, ..catan() };
        assert_ne!(reranked, catan());
        assert!(!map.contains_key(&reranked));
    }

    #[test]
    fn test_player_and_time_checks() {
        let game = catan();

        assert!(game.supports_players(3, 4));
        assert!(game.supports_players(4, 4));
        assert!(!game.supports_players(2, 4));
        assert!(!game.supports_players(3, 5));
        assert!(game.fits_within(120));
        assert!(!game.fits_within(90));
    }

    #[test]
    fn test_catalog_entry_json() {
        let entry = CatalogEntry {
            game: catan(),
            categories: vec!["Strategy".into(), "Économie".into()],
        };

        assert!(entry.has_category("STRATEGY"));
        assert!(entry.has_category("économie"));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "Catan");
        assert_eq!(json["max_playtime"], 120);
        assert_eq!(json["categories"][0], "Strategy");
    }
}
