use super::Engine;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    api::{CatalogAPI, QuoteAPI},
    entities::Quote,
    error::Error,
    pricing,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(
        &self,
        car_id: &str,
        pickup_date: Option<NaiveDate>,
        return_date: Option<NaiveDate>,
    ) -> Result<Quote, Error> {
        let car = self.find_car(car_id).await?;

        Ok(pricing::quote(pickup_date, return_date, car.price_per_day))
    }
}
