use async_trait::async_trait;
use leptos_router::NavigateOptions;

use happy_core::{
    entities::Orphanage,
    gateways::{Navigator, OrphanageGateway},
    navigation::Destination,
    Error, Result,
};
use happy_frontend_api::{self as api, PublicApi};

use crate::pages::destination_path;

pub struct ApiGateway(PublicApi);

impl ApiGateway {
    pub const fn new(api: PublicApi) -> Self {
        Self(api)
    }
}

#[async_trait(?Send)]
impl OrphanageGateway for ApiGateway {
    async fn list_orphanages(&self) -> Result<Vec<Orphanage>> {
        let orphanages = self.0.orphanages().await.map_err(|err| match err {
            api::Error::Fetch(msg) => Error::Fetch(msg),
            api::Error::Decode(msg) => Error::MalformedResponse(msg),
            api::Error::Api(err) => Error::Api {
                status: err.http_status,
                message: err.message,
            },
        })?;
        orphanages
            .into_iter()
            .map(|orphanage| {
                Orphanage::try_from(orphanage)
                    .map_err(|err| Error::MalformedResponse(err.to_string()))
            })
            .collect()
    }
}

/// Forwards the destinations of the map to the router.
pub struct RouterNavigator<F>(F);

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self(navigate)
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, destination: Destination) {
        (self.0)(&destination_path(destination), NavigateOptions::default());
    }
}
