//! Client for the Board Game Atlas API: game search and category list.

pub mod categories;
pub mod decoder;
pub mod games;
pub mod transport;


pub use categories::CategoryFetcher;
pub use decoder::{CategoryPairing, JsonDecoder};
pub use games::{CatalogFetcher, GameCategories};
pub use transport::{HttpTransport, Transport};

/// Game search endpoint.
pub const SEARCH_API: &str = "https://api.boardgameatlas.com/api/search";

/// Full category list endpoint.
pub const CATEGORIES_API: &str = "https://api.boardgameatlas.com/api/game/categories";

/// Fields requested from the search endpoint.
pub const SEARCH_FIELDS: &str = "name,year_published,min_players,max_players,min_playtime,\
max_playtime,thumb_url,image_url,rank,description,categories";

pub const ORDER_BY: &str = "popularity";
