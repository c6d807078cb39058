pub mod board_game;
pub mod category;
pub mod outcome;

pub use board_game::{BoardGame, CatalogEntry};
pub use category::Category;
pub use outcome::FetchOutcome;
