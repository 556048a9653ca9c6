use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::hotel::Hotel;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryRequest {
    pub interests: Vec<String>,
    pub travel_month: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

impl ItineraryRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.interests.is_empty() {
            return Err("Select at least one interest".to_string());
        }
        if self.travel_month.trim().is_empty() {
            return Err("Select a travel month".to_string());
        }
        if let Some(budget) = self.budget {
            if budget < 0.0 {
                return Err("Budget must be a positive number".to_string());
            }
        }
        Ok(())
    }
}

/// Attraction summary carried on an itinerary candidate.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Attraction {
    pub name: String,
    pub rating: f64,
    pub interest: Vec<String>,
    pub price_fare: f64,
}

/// One city's candidate itinerary for one interest.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryCity {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub attractions: Vec<Attraction>,
    pub hotels: Vec<Hotel>,
    pub rating: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub best_months: Vec<String>,
    pub estimated_daily_cost: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<HashMap<String, Vec<ItineraryCity>>>,
}

impl ItineraryResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            itinerary: None,
        }
    }

    /// Success with nothing to show: valid request, no matching data.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            itinerary: Some(HashMap::new()),
        }
    }

    pub fn with_itinerary(itinerary: HashMap<String, Vec<ItineraryCity>>) -> Self {
        Self {
            success: true,
            message: None,
            itinerary: Some(itinerary),
        }
    }
}
