use std::collections::HashMap;
use std::num::NonZeroU32;

use reqwest::Url;
use serde_json::Value;

use super::decoder::{as_text, find_values, JsonDecoder};
use super::transport::Transport;
use super::{ORDER_BY, SEARCH_FIELDS};
use crate::credentials::CredentialProvider;
use crate::error::FetchError;
use crate::global::Global;
use crate::types::{BoardGame, FetchOutcome};

/// Each fetched game mapped to its raw category ids, in the order the
/// response lists them.
pub type GameCategories = HashMap<BoardGame, Vec<String>>;

pub struct CatalogFetcher<'a> {
    transport: &'a dyn Transport,
    credentials: &'a dyn CredentialProvider,
    decoder: &'a JsonDecoder,
    endpoint: &'a Url,
}

impl<'a> CatalogFetcher<'a> {
    pub fn new(global: &'a Global) -> Self {
        Self::with_parts(
            &global.http,
            &global.secrets,
            &global.decoder,
            &global.search_url,
        )
    }

    pub fn with_parts(
        transport: &'a dyn Transport,
        credentials: &'a dyn CredentialProvider,
        decoder: &'a JsonDecoder,
        endpoint: &'a Url,
    ) -> Self {
        Self {
            transport,
            credentials,
            decoder,
            endpoint,
        }
    }

    pub fn search_url(&self, count: NonZeroU32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &count.to_string())
            .append_pair("order_by", ORDER_BY)
            .append_pair("fields", SEARCH_FIELDS)
            .append_pair("client_id", self.credentials.client_id());
        url
    }

    /// Fetch up to `count` games ordered by popularity.
    ///
    /// A body that cannot be decoded is logged and yields an empty map, so
    /// callers cannot tell it apart from an empty search. Use
    /// [`Self::try_fetch_games`] to see the difference.
    pub fn fetch_games(&self, count: NonZeroU32) -> Result<GameCategories, FetchError> {
        self.try_fetch_games(count).into_compat()
    }

    #[tracing::instrument(name = "search", skip(self))]
    pub fn try_fetch_games(&self, count: NonZeroU32) -> FetchOutcome<GameCategories> {
        let body = match self.transport.get_text(&self.search_url(count)) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, kind = e.as_str(), "game search request failed");
                return FetchOutcome::Failed(e);
            }
        };

        match parse_games(self.decoder, &body) {
            Ok(games) if games.is_empty() => {
                tracing::debug!("search returned no games");
                FetchOutcome::Empty
            }
            Ok(games) => {
                tracing::info!(count = games.len(), "fetched games");
                FetchOutcome::Fetched(games)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.as_str(),
                    "failed to decode game search response"
                );
                FetchOutcome::Failed(e)
            }
        }
    }
}

/// Decode a search response body. Any missing field aborts the whole body.
pub fn parse_games(decoder: &JsonDecoder, body: &str) -> Result<GameCategories, FetchError> {
    let root = decoder.parse(body)?;
    let games = decoder
        .required(&root, "games")?
        .as_array()
        .ok_or(FetchError::Shape {
            field: "games",
            expected: "an array",
        })?;

    let mut out = GameCategories::with_capacity(games.len());
    for entry in games {
        let game = read_game(decoder, entry)?;
        let categories = category_ids(decoder.required(entry, "categories")?);
        out.insert(game, categories);
    }

    Ok(out)
}

fn read_game(decoder: &JsonDecoder, entry: &Value) -> Result<BoardGame, FetchError> {
    Ok(BoardGame {
        name: decoder.text(entry, "name")?,
        year_published: decoder.int(entry, "year_published")?,
        min_players: decoder.int(entry, "min_players")?,
        max_players: decoder.int(entry, "max_players")?,
        min_playtime: decoder.int(entry, "min_playtime")?,
        max_playtime: decoder.int(entry, "max_playtime")?,
        thumb_url: decoder.text(entry, "thumb_url")?,
        image_url: decoder.text(entry, "image_url")?,
        rank: decoder.int(entry, "rank")?,
        description: decoder.text(entry, "description")?,
    })
}

/// Every `id` under the game's `categories` node, at any depth.
fn category_ids(categories: &Value) -> Vec<String> {
    find_values(categories, "id").into_iter().map(as_text).collect()
}
