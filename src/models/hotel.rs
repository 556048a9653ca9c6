use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::services::normalize;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Hotel {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default = "Hotel::unnamed")]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, deserialize_with = "normalize::lenient_f64")]
    pub rating: f64,
    #[serde(default, deserialize_with = "normalize::lenient_f64")]
    pub price_per_night: f64,
}

impl Hotel {
    fn unnamed() -> String {
        "Unknown Hotel".to_string()
    }
}
