//! Resolution of raw category ids into names, and the store the resolved
//! catalog is loaded into.

pub mod store;

pub use store::{GameStore, MemoryStore};

use std::collections::HashMap;

use crate::atlas::GameCategories;
use crate::types::{CatalogEntry, Category};

/// Replace each game's category ids with the matching category names.
///
/// Ids missing from `categories` are dropped. The result is ordered by
/// popularity rank, then name.
#[tracing::instrument(skip_all, fields(games = games.len(), categories = categories.len()))]
pub fn resolve(games: &GameCategories, categories: &[Category]) -> Vec<CatalogEntry> {
    let names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut entries: Vec<CatalogEntry> = games
        .iter()
        .map(|(game, ids)| {
            let categories = ids
                .iter()
                .filter_map(|id| match names.get(id.as_str()) {
                    Some(name) => Some((*name).to_string()),
                    None => {
                        tracing::debug!(game = %game.name, id = %id, "unknown category id");
                        None
                    }
                })
                .collect();

            CatalogEntry {
                game: game.clone(),
                categories,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        a.game
            .rank
            .cmp(&b.game.rank)
            .then_with(|| a.game.name.cmp(&b.game.name))
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardGame;

    fn game(name: &str, rank: i32) -> BoardGame {
        BoardGame {
            name: name.to_string(),
            year_published: 2000,
            min_players: 2,
            max_players: 4,
            min_playtime: 30,
            max_playtime: 60,
            thumb_url: String::new(),
            image_url: String::new(),
            rank,
            description: String::new(),
        }
    }

    #[test]
    fn test_resolve_names_in_order() {
        let mut games = GameCategories::new();
        games.insert(game("Catan", 5), vec!["102".into(), "101".into()]);
        games.insert(game("Azul", 1), vec![]);

        let categories = vec![
            Category::new("101", "Strategy"),
            Category::new("102", "Economic"),
        ];

        let entries = resolve(&games, &categories);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].game.name, "Azul");
        assert!(entries[0].categories.is_empty());
        assert_eq!(entries[1].game.name, "Catan");
        assert_eq!(entries[1].categories, vec!["Economic", "Strategy"]);
    }

    #[test]
    fn test_resolve_drops_unknown_ids() {
        let mut games = GameCategories::new();
        games.insert(game("Catan", 5), vec!["101".into(), "999".into()]);

        let entries = resolve(&games, &[Category::new("101", "Strategy")]);

        assert_eq!(entries[0].categories, vec!["Strategy"]);
    }
}
