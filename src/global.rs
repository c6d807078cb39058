use anyhow::Context as _;
use reqwest::Url;

use crate::atlas::{HttpTransport, JsonDecoder};
use crate::config::Settings;
use crate::credentials::Secrets;

/// Process-wide state shared by both fetchers. Everything here is read-only
/// once built.
pub struct Global {
    pub config: Settings,
    pub http: HttpTransport,
    pub decoder: JsonDecoder,
    pub secrets: Secrets,
    pub search_url: Url,
    pub categories_url: Url,
}

impl Global {
    pub fn init(config: Settings) -> anyhow::Result<Self> {
        if config.api.client_id.trim().is_empty() {
            anyhow::bail!("api.client_id is not set (use APP__API__CLIENT_ID)");
        }

        let search_url = Url::parse(&config.api.search_url).context("api.search_url")?;
        let categories_url =
            Url::parse(&config.api.categories_url).context("api.categories_url")?;

        let http = HttpTransport::new(&config.api.user_agent).context("http client")?;
        let decoder = JsonDecoder::new(config.catalog.category_pairing);
        let secrets = Secrets::new(config.api.client_id.clone());

        tracing::debug!(
            search_url = %search_url,
            categories_url = %categories_url,
            pairing = ?decoder.pairing(),
            "initialized upstream client"
        );

        Ok(Self {
            config,
            http,
            decoder,
            secrets,
            search_url,
            categories_url,
        })
    }
}
