use crate::types::CatalogEntry;

/// Storage for resolved catalog entries and the lookups the recommendation
/// side needs. Every query returns games ordered by rank.
pub trait GameStore {
    /// Replace the stored catalog.
    fn save_all(&mut self, entries: Vec<CatalogEntry>);

    fn all(&self) -> Vec<&CatalogEntry>;

    /// Games that can be finished within `minutes`.
    fn find_by_play_time_at_most(&self, minutes: i32) -> Vec<&CatalogEntry>;

    /// Games tagged with `category`, compared case-insensitively.
    fn find_by_category(&self, category: &str) -> Vec<&CatalogEntry>;

    fn find_by_play_time_at_most_and_category(
        &self,
        minutes: i32,
        category: &str,
    ) -> Vec<&CatalogEntry>;

    /// Games playable by any group size between `min` and `max`.
    fn find_by_player_count(&self, min: i32, max: i32) -> Vec<&CatalogEntry>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<CatalogEntry>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn filter(&self, pred: impl Fn(&CatalogEntry) -> bool) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| pred(*e)).collect()
    }
}

impl GameStore for MemoryStore {
    fn save_all(&mut self, mut entries: Vec<CatalogEntry>) {
        entries.sort_by_key(|e| e.game.rank);
        tracing::debug!(count = entries.len(), "storing catalog");
        self.entries = entries;
    }

    fn all(&self) -> Vec<&CatalogEntry> {
        self.entries.iter().collect()
    }

    fn find_by_play_time_at_most(&self, minutes: i32) -> Vec<&CatalogEntry> {
        self.filter(|e| e.game.fits_within(minutes))
    }

    fn find_by_category(&self, category: &str) -> Vec<&CatalogEntry> {
        self.filter(|e| e.has_category(category))
    }

    fn find_by_play_time_at_most_and_category(
        &self,
        minutes: i32,
        category: &str,
    ) -> Vec<&CatalogEntry> {
        self.filter(|e| e.game.fits_within(minutes) && e.has_category(category))
    }

    fn find_by_player_count(&self, min: i32, max: i32) -> Vec<&CatalogEntry> {
        self.filter(|e| e.game.supports_players(min, max))
    }
}
