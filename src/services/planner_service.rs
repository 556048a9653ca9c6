use std::collections::{BTreeMap, HashMap};

use futures::future;
use log::{error, warn};

use crate::models::{
    city::City,
    hotel::Hotel,
    itinerary::{Attraction, ItineraryCity, ItineraryRequest, ItineraryResult},
    place::Place,
};
use crate::services::destination_store::{DestinationStore, StoreError};

const DAILY_FOOD_ALLOWANCE: f64 = 1500.0;
const ATTRACTIONS_PER_DAY: usize = 3;

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Flat daily allowance for food and incidentals, in currency units.
    pub daily_food_allowance: f64,
    /// Baseline number of attraction visits modeled per day.
    pub attractions_per_day: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            daily_food_allowance: DAILY_FOOD_ALLOWANCE,
            attractions_per_day: ATTRACTIONS_PER_DAY,
        }
    }
}

pub struct ItineraryPlanner<S> {
    store: S,
    config: PlannerConfig,
}

impl<S: DestinationStore> ItineraryPlanner<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(store: S, config: PlannerConfig) -> Self {
        Self { store, config }
    }

    /// Assemble a ranked itinerary for the request. Never fails past this
    /// boundary: every error is folded into the result envelope.
    pub async fn generate(&self, request: &ItineraryRequest) -> ItineraryResult {
        if let Err(message) = request.validate() {
            return ItineraryResult::failure(message);
        }

        match self.assemble(request).await {
            Ok(result) => result,
            Err(err) => {
                error!("itinerary assembly failed: {err}");
                ItineraryResult::failure(format!("Failed to create itinerary: {err}"))
            }
        }
    }

    async fn assemble(&self, request: &ItineraryRequest) -> Result<ItineraryResult, StoreError> {
        let month = request.travel_month.trim();

        let cities = self.store.cities_by_month(month).await?;

        let visitable: HashMap<String, City> = cities
            .into_iter()
            .filter(|city| month_matches(&city.best_time_to_visit, month))
            .map(|city| (city.key(), city))
            .collect();

        if visitable.is_empty() {
            return Ok(ItineraryResult::empty(
                "No cities available for your selected travel month.",
            ));
        }

        let city_names: Vec<String> = visitable.keys().cloned().collect();

        // The hotel batch read and the per-interest place reads are
        // independent, so they fan out together and join once.
        let place_reads = future::join_all(
            request
                .interests
                .iter()
                .map(|interest| self.store.places_by_interest(interest, &city_names)),
        );
        let (hotel_read, place_results) =
            futures::join!(self.store.hotels_by_cities(&city_names), place_reads);

        let hotels_by_city = match hotel_read {
            Ok(hotels) => group_hotels(hotels),
            Err(err) => {
                warn!("hotel lookup failed, continuing without hotel data: {err}");
                HashMap::new()
            }
        };

        let mut itinerary: HashMap<String, Vec<ItineraryCity>> = HashMap::new();

        for (interest, read) in request.interests.iter().zip(place_results) {
            let places = match read {
                Ok(places) => places,
                Err(err) => {
                    error!("place lookup for interest {interest:?} failed, skipping: {err}");
                    continue;
                }
            };
            if places.is_empty() {
                continue;
            }

            let candidates = self.cities_for_interest(
                interest,
                places,
                &visitable,
                &hotels_by_city,
                request.budget,
            );
            if !candidates.is_empty() {
                itinerary.insert(interest.clone(), candidates);
            }
        }

        if itinerary.is_empty() {
            let message = if request.budget.is_some() {
                "No matching destinations found for your interests, travel month, and budget constraints."
            } else {
                "No matching destinations found for your interests and travel month."
            };
            return Ok(ItineraryResult::empty(message));
        }

        Ok(ItineraryResult::with_itinerary(itinerary))
    }

    fn cities_for_interest(
        &self,
        interest: &str,
        places: Vec<Place>,
        visitable: &HashMap<String, City>,
        hotels_by_city: &HashMap<String, Vec<Hotel>>,
        budget: Option<f64>,
    ) -> Vec<ItineraryCity> {
        let mut candidates = Vec::new();

        for (city_key, places) in group_places(places) {
            let Some(city_info) = visitable.get(&city_key) else {
                continue;
            };

            let city_hotels = hotels_by_city
                .get(&city_key)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let in_budget: Vec<Hotel> = match budget {
                Some(limit) => city_hotels
                    .iter()
                    .filter(|hotel| hotel.price_per_night <= limit)
                    .cloned()
                    .collect(),
                None => city_hotels.to_vec(),
            };

            let daily_cost = self.estimated_daily_cost(&places, &in_budget, city_hotels);
            if let Some(limit) = budget {
                if daily_cost > limit {
                    // Over budget: dropped outright rather than ranked last.
                    continue;
                }
            }

            let state = places
                .first()
                .and_then(|place| place.state.clone())
                .or_else(|| city_info.state.clone());

            candidates.push(ItineraryCity {
                city: city_info.city.clone(),
                state,
                attractions: places
                    .iter()
                    .map(|place| Attraction {
                        name: place.name.clone(),
                        rating: place.rating,
                        interest: place.interest_tags(interest),
                        price_fare: place.price_fare,
                    })
                    .collect(),
                hotels: in_budget,
                rating: city_info.rating,
                description: city_info.description.clone(),
                best_months: city_info.best_time_to_visit.clone(),
                estimated_daily_cost: daily_cost.round() as i64,
            });
        }

        rank_by_rating(&mut candidates);
        candidates
    }

    /// Estimated cost of one day in a city: a night at an average hotel,
    /// the day's attraction entries, and the food allowance. Hotels that
    /// blew the budget still inform the estimate when nothing fits it.
    fn estimated_daily_cost(
        &self,
        places: &[Place],
        budget_hotels: &[Hotel],
        all_hotels: &[Hotel],
    ) -> f64 {
        let avg_attraction = mean(places.iter().map(|place| place.price_fare));
        let avg_hotel = if !budget_hotels.is_empty() {
            mean(budget_hotels.iter().map(|hotel| hotel.price_per_night))
        } else {
            mean(all_hotels.iter().map(|hotel| hotel.price_per_night))
        };

        avg_hotel
            + avg_attraction * self.config.attractions_per_day as f64
            + self.config.daily_food_allowance
    }
}

/// Case-insensitive "contains" test of the month against the normalized
/// best-months entries (a substring filter, not set membership).
pub fn month_matches(best_months: &[String], month: &str) -> bool {
    let needle = month.to_lowercase();
    best_months
        .iter()
        .any(|entry| entry.to_lowercase().contains(&needle))
}

fn group_places(places: Vec<Place>) -> BTreeMap<String, Vec<Place>> {
    let mut grouped: BTreeMap<String, Vec<Place>> = BTreeMap::new();
    for place in places {
        if place.city.is_empty() {
            continue;
        }
        grouped.entry(place.city.to_lowercase()).or_default().push(place);
    }
    grouped
}

fn group_hotels(hotels: Vec<Hotel>) -> HashMap<String, Vec<Hotel>> {
    let mut grouped: HashMap<String, Vec<Hotel>> = HashMap::new();
    for hotel in hotels {
        if hotel.city.is_empty() {
            continue;
        }
        grouped.entry(hotel.city.to_lowercase()).or_default().push(hotel);
    }
    grouped
}

fn rank_by_rating(candidates: &mut [ItineraryCity]) {
    candidates.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
