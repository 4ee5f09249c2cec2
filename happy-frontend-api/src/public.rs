use gloo_net::http::Request;

use happy_boundary::Orphanage;

use crate::{into_json, Result};

/// Public Happy API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn orphanages(&self) -> Result<Vec<Orphanage>> {
        let url = format!("{}/orphanages", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}
