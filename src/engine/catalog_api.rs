use super::Engine;

use async_trait::async_trait;

use crate::{
    api::CatalogAPI,
    catalog::{self, SearchFilter, SortOrder},
    entities::Car,
    error::{invalid_input_error, Error},
};

#[async_trait]
impl CatalogAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search_cars(
        &self,
        filter: &SearchFilter,
        sort: Option<SortOrder>,
    ) -> Result<Vec<Car>, Error> {
        let cars = self.cars.read().await;

        Ok(catalog::search(&cars, filter, sort))
    }

    #[tracing::instrument(skip(self))]
    async fn find_car(&self, id: &str) -> Result<Car, Error> {
        let cars = self.cars.read().await;

        cars.iter()
            .find(|car| car.id == id)
            .cloned()
            .ok_or_else(|| invalid_input_error())
    }
}
