use async_trait::async_trait;
use reqwest::Client;

use happy_boundary as json;
use happy_core::{entities::Orphanage, gateways::OrphanageGateway, Error, Result};

use crate::config;

/// Fetches the orphanages from the backend over HTTP.
pub struct HttpGateway {
    client: Client,
    url: String,
}

impl HttpGateway {
    pub fn try_new(cfg: &config::Api) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(cfg.request_timeout).build()?;
        Ok(Self {
            client,
            url: cfg.url.clone(),
        })
    }
}

#[async_trait(?Send)]
impl OrphanageGateway for HttpGateway {
    async fn list_orphanages(&self) -> Result<Vec<Orphanage>> {
        let url = format!("{}/orphanages", self.url);
        log::debug!("GET {url}");
        let response = self.client.get(&url).send().await.map_err(fetch_error)?;
        let status = response.status();
        let body = response.text().await.map_err(fetch_error)?;
        if !status.is_success() {
            let message = serde_json::from_str::<json::Error>(&body)
                .map(|err| err.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }
        decode_orphanages(&body)
    }
}

fn fetch_error(err: reqwest::Error) -> Error {
    Error::Fetch(err.to_string())
}

fn decode_orphanages(body: &str) -> Result<Vec<Orphanage>> {
    let orphanages: Vec<json::Orphanage> =
        serde_json::from_str(body).map_err(|err| Error::MalformedResponse(err.to_string()))?;
    orphanages
        .into_iter()
        .map(|orphanage| {
            Orphanage::try_from(orphanage).map_err(|err| Error::MalformedResponse(err.to_string()))
        })
        .collect()
}
