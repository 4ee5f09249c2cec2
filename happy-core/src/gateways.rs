use std::rc::Rc;

use async_trait::async_trait;

use crate::{entities::Orphanage, navigation::Destination, Result};

/// Read access to the orphanages of the backend.
///
/// Implementations are responsible for validating the payload
/// and must report records that do not fit into an [`Orphanage`]
/// as [`crate::Error::MalformedResponse`].
#[async_trait(?Send)]
pub trait OrphanageGateway {
    async fn list_orphanages(&self) -> Result<Vec<Orphanage>>;
}

pub trait Navigator {
    fn navigate(&self, destination: Destination);
}

#[async_trait(?Send)]
impl<T> OrphanageGateway for Rc<T>
where
    T: OrphanageGateway + ?Sized,
{
    async fn list_orphanages(&self) -> Result<Vec<Orphanage>> {
        T::list_orphanages(self).await
    }
}

impl<T> Navigator for Rc<T>
where
    T: Navigator + ?Sized,
{
    fn navigate(&self, destination: Destination) {
        T::navigate(self, destination);
    }
}
