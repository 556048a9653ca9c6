use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};
use std::sync::Arc;
use thiserror::Error;

use crate::models::{city::City, hotel::Hotel, place::Place};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("destination query failed: {0}")]
    Query(#[from] mongodb::error::Error),
    #[error("{0}")]
    Unavailable(String),
}

/// Read-side contract the planner consumes. City-name arguments are the
/// planner's lower-cased keys; implementations adapt them to whatever
/// capitalization the backing store uses.
#[allow(async_fn_in_trait)]
pub trait DestinationStore {
    async fn cities_by_month(&self, month: &str) -> Result<Vec<City>, StoreError>;

    async fn places_by_interest(
        &self,
        interest: &str,
        city_names: &[String],
    ) -> Result<Vec<Place>, StoreError>;

    async fn hotels_by_cities(&self, city_names: &[String]) -> Result<Vec<Hotel>, StoreError>;
}

pub struct MongoDestinationStore {
    client: Arc<Client>,
}

impl MongoDestinationStore {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn cities(&self) -> Collection<City> {
        self.client.database("Destinations").collection("Cities")
    }

    fn places(&self) -> Collection<Place> {
        self.client.database("Destinations").collection("Places")
    }

    fn hotels(&self) -> Collection<Hotel> {
        self.client.database("Destinations").collection("Hotels")
    }
}

impl DestinationStore for MongoDestinationStore {
    async fn cities_by_month(&self, month: &str) -> Result<Vec<City>, StoreError> {
        let filter = doc! {
            "best_time_to_visit": {
                "$regex": regex::escape(month),
                "$options": "i"
            }
        };
        let cursor = self.cities().find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn places_by_interest(
        &self,
        interest: &str,
        city_names: &[String],
    ) -> Result<Vec<Place>, StoreError> {
        let filter = doc! {
            "interest": {
                "$regex": regex::escape(interest),
                "$options": "i"
            },
            "city": { "$in": stored_city_names(city_names) }
        };
        let cursor = self.places().find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn hotels_by_cities(&self, city_names: &[String]) -> Result<Vec<Hotel>, StoreError> {
        let filter = doc! { "city": { "$in": stored_city_names(city_names) } };
        let cursor = self.hotels().find(filter).await?;
        Ok(cursor.try_collect().await?)
    }
}

/// Stored rows keep city names in title case; planner keys are
/// lower-cased. The adaptation lives here, at the store boundary.
fn stored_city_names(city_names: &[String]) -> Vec<String> {
    city_names.iter().map(|name| title_case(name)).collect()
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
