use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::services::normalize;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Place {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(alias = "popular_destination", default = "Place::unnamed")]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "normalize::lenient_f64")]
    pub rating: f64,
    #[serde(default, deserialize_with = "normalize::lenient_f64")]
    pub price_fare: f64,
    #[serde(default, deserialize_with = "normalize::lenient_string_list")]
    pub interest: Vec<String>,
}

impl Place {
    fn unnamed() -> String {
        "Unnamed Destination".to_string()
    }

    /// Interest tags are never empty: rows whose tag field failed to
    /// normalize fall back to the interest string that matched them.
    pub fn interest_tags(&self, queried_interest: &str) -> Vec<String> {
        if self.interest.is_empty() {
            vec![queried_interest.to_string()]
        } else {
            self.interest.clone()
        }
    }
}
