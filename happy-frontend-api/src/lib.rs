use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod public;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error(transparent)]
    Api(#[from] happy_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        let body = response.text().await?;
        decode_json(&body)
    } else {
        let http_status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        Err(api_error(http_status, status_text, &body).into())
    }
}

fn decode_json<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|err| Error::Decode(err.to_string()))
}

fn api_error(http_status: u16, status_text: String, body: &str) -> happy_boundary::Error {
    serde_json::from_str(body).unwrap_or_else(|_| {
        let message = if body.trim().is_empty() {
            status_text
        } else {
            body.trim().to_string()
        };
        happy_boundary::Error {
            http_status,
            message,
        }
    })
}
