use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::services::normalize;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct City {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "normalize::lenient_string_list")]
    pub best_time_to_visit: Vec<String>,
    #[serde(default, deserialize_with = "normalize::lenient_f64")]
    pub rating: f64,
    #[serde(default)]
    pub description: String,
}

impl City {
    /// City identity inside the planner is the lower-cased name.
    pub fn key(&self) -> String {
        self.city.to_lowercase()
    }
}
