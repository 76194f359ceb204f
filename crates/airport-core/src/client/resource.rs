//! Generic CRUD adapter over one endpoint family.

use std::marker::PhantomData;

use log::info;

use super::{envelope::unwrap_collection, ApiClient};
use crate::{
    error::Result,
    models::{Id, Resource},
    transport::ApiRequest,
};

/// CRUD operations for resource type `R` under `/<collection>`.
///
/// Mutations return as soon as the server confirms them; callers re-list the
/// collection afterwards instead of patching local copies.
pub struct Resources<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Resources<R> {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    fn item_path(id: Id) -> String {
        format!("{}/{id}", R::KIND.base_path())
    }

    /// Lists the whole collection in server order.
    pub async fn list(&self) -> Result<Vec<R>> {
        let body = self
            .api
            .execute(ApiRequest::get(R::KIND.base_path()))
            .await?;
        unwrap_collection(&body, R::KIND.collection())
    }

    /// Fetches one entity by id.
    pub async fn get(&self, id: Id) -> Result<R> {
        let body = self.api.execute(ApiRequest::get(Self::item_path(id))).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Submits a draft and returns the stored record with its generated id.
    pub async fn create(&self, draft: &R::Draft) -> Result<R> {
        let request = ApiRequest::post(
            format!("{}/create", R::KIND.base_path()),
            serde_json::to_value(draft)?,
        );
        let body = self.api.execute(request).await?;
        let created: R = serde_json::from_str(&body)?;
        info!("Created {} {}", R::KIND, created.id());
        Ok(created)
    }

    /// Replaces the entity stored under `id` with `entity`.
    pub async fn update(&self, id: Id, entity: &R) -> Result<()> {
        let request = ApiRequest::post(
            format!("{}/update", Self::item_path(id)),
            serde_json::to_value(entity)?,
        );
        self.api.execute(request).await?;
        info!("Updated {} {id}", R::KIND);
        Ok(())
    }

    /// Deletes the entity stored under `id`.
    pub async fn delete(&self, id: Id) -> Result<()> {
        self.api
            .execute(ApiRequest::delete(Self::item_path(id)))
            .await?;
        info!("Deleted {} {id}", R::KIND);
        Ok(())
    }
}
