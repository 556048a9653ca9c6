use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::itinerary::ItineraryCity;

/// Snapshot of a generated itinerary a user chose to keep. Saving an
/// entry whose id already exists for that user replaces it.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SavedItinerary {
    #[serde(rename = "_id", alias = "id", default = "SavedItinerary::new_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    pub city: String,
    pub interests: Vec<String>,
    pub month: String,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    pub estimated_cost: i64,
    pub city_data: ItineraryCity,
}

impl SavedItinerary {
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }
}
