use reqwest::Url;
use serde_json::Value;

use super::decoder::{as_text, find_objects_with, find_values, CategoryPairing, JsonDecoder};
use super::transport::Transport;
use crate::credentials::CredentialProvider;
use crate::error::FetchError;
use crate::global::Global;
use crate::types::{Category, FetchOutcome};

pub struct CategoryFetcher<'a> {
    transport: &'a dyn Transport,
    credentials: &'a dyn CredentialProvider,
    decoder: &'a JsonDecoder,
    endpoint: &'a Url,
}

impl<'a> CategoryFetcher<'a> {
    pub fn new(global: &'a Global) -> Self {
        Self::with_parts(
            &global.http,
            &global.secrets,
            &global.decoder,
            &global.categories_url,
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

    pub fn categories_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client_id", self.credentials.client_id());
        url
    }

    /// Fetch the whole category list. Decode failures yield an empty list.
    pub fn fetch_all_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.try_fetch_all_categories().into_compat()
    }

    #[tracing::instrument(name = "categories", skip(self))]
    pub fn try_fetch_all_categories(&self) -> FetchOutcome<Vec<Category>> {
        let body = match self.transport.get_text(&self.categories_url()) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, kind = e.as_str(), "category request failed");
                return FetchOutcome::Failed(e);
            }
        };

        match parse_categories(self.decoder, &body) {
            Ok(categories) if categories.is_empty() => {
                tracing::debug!("category list is empty");
                FetchOutcome::Empty
            }
            Ok(categories) => {
                tracing::info!(count = categories.len(), "fetched categories");
                FetchOutcome::Fetched(categories)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.as_str(),
                    "failed to decode category response"
                );
                FetchOutcome::Failed(e)
            }
        }
    }
}

pub fn parse_categories(decoder: &JsonDecoder, body: &str) -> Result<Vec<Category>, FetchError> {
    let root = decoder.parse(body)?;

    Ok(match decoder.pairing() {
        CategoryPairing::Positional => pair_positionally(&root),
        CategoryPairing::ObjectScoped => pair_by_object(&root),
    })
}

/// Pairs the i-th `id` in the tree with the i-th `name`. When the counts
/// differ the result stops at the shorter list.
fn pair_positionally(root: &Value) -> Vec<Category> {
    let ids = find_values(root, "id");
    let names = find_values(root, "name");

    if ids.len() != names.len() {
        tracing::warn!(
            ids = ids.len(),
            names = names.len(),
            "category ids and names differ in count, pairing by position"
        );
    }

    ids.into_iter()
        .zip(names)
        .map(|(id, name)| Category::new(as_text(id), as_text(name)))
        .collect()
}

fn pair_by_object(root: &Value) -> Vec<Category> {
    find_objects_with(root, "id")
        .into_iter()
        .map(|obj| {
            let name = obj.get("name").map(as_text).unwrap_or_default();
            Category::new(as_text(&obj["id"]), name)
        })
        .collect()
}
