use serde::{Deserialize, Serialize};

use crate::models::hotel::Hotel;
use crate::models::itinerary::{Attraction, ItineraryCity};
use crate::services::planner_service::PlannerConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DayActivity {
    pub time: String,
    pub activity: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DayPlan {
    pub day: u32,
    pub activities: Vec<DayActivity>,
}

/// Expand a city candidate into day-by-day activities. The plan never
/// drops attractions: when the requested duration is too short for the
/// attraction list, the duration stretches instead. Day k (0-based)
/// takes the attraction slice [k*per_day, (k+1)*per_day).
pub fn generate_daily_plans(
    city: &ItineraryCity,
    trip_duration: u32,
    config: &PlannerConfig,
) -> Vec<DayPlan> {
    let per_day = config.attractions_per_day.max(1);
    let requested = trip_duration.max(1);

    let selected_hotel = best_hotel(&city.hotels);

    let days_needed = city.attractions.len().div_ceil(per_day) as u32;
    let effective = requested.max(days_needed);

    let mut days = Vec::with_capacity(effective as usize);
    for day_index in 0..effective {
        let day_number = day_index + 1;
        let start = day_index as usize * per_day;
        let slice: &[Attraction] = if start < city.attractions.len() {
            &city.attractions[start..(start + per_day).min(city.attractions.len())]
        } else {
            &[]
        };

        let mut activities = Vec::new();

        if day_number == 1 {
            activities.push(DayActivity {
                time: "Morning".to_string(),
                activity: format!("Arrive in {}", city.city),
                description: format!("Welcome to {}!", city.city),
                price: None,
            });
            activities.push(check_in(selected_hotel));
            for (index, attraction) in slice.iter().enumerate() {
                let time = if index == 0 { "Evening" } else { "Night" };
                activities.push(visit(attraction, time));
            }
        } else if day_number == effective {
            activities.push(check_out(selected_hotel));
            for (index, attraction) in slice.iter().enumerate() {
                let time = match index {
                    0 => "Late Morning",
                    1 => "Afternoon",
                    _ => "Evening",
                };
                activities.push(visit(attraction, time));
            }
            activities.push(DayActivity {
                time: "Night".to_string(),
                activity: format!("Departure from {}", city.city),
                description: format!("Farewell to {}!", city.city),
                price: None,
            });
        } else {
            for (index, attraction) in slice.iter().enumerate() {
                let time = match index {
                    0 => "Morning",
                    1 => "Afternoon",
                    _ => "Evening",
                };
                activities.push(visit(attraction, time));
            }
        }

        // A stretched duration can leave a middle day without
        // attractions; it still gets something to do.
        if activities.is_empty() {
            activities.push(DayActivity {
                time: "Day".to_string(),
                activity: format!("Explore {} at your leisure", city.city),
                description: "Enjoy free time to discover local gems, revisit favorites, or relax."
                    .to_string(),
                price: None,
            });
        }

        days.push(DayPlan {
            day: day_number,
            activities,
        });
    }

    days
}

/// Highest-rated hotel wins; ties go to the first in input order.
fn best_hotel(hotels: &[Hotel]) -> Option<&Hotel> {
    hotels
        .iter()
        .reduce(|best, hotel| if hotel.rating > best.rating { hotel } else { best })
}

fn check_in(hotel: Option<&Hotel>) -> DayActivity {
    match hotel {
        Some(hotel) => DayActivity {
            time: "Afternoon".to_string(),
            activity: format!("Check-in at {}", hotel.name),
            description: format!(
                "Get settled at {} ({}★) located in {}.",
                hotel.name, hotel.rating, hotel.city
            ),
            price: None,
        },
        None => DayActivity {
            time: "Afternoon".to_string(),
            activity: "Check-in at your hotel".to_string(),
            description: "Get settled at your hotel and prepare for your adventure.".to_string(),
            price: None,
        },
    }
}

fn check_out(hotel: Option<&Hotel>) -> DayActivity {
    let activity = match hotel {
        Some(hotel) => format!("Check-out from {}", hotel.name),
        None => "Check-out from your hotel".to_string(),
    };
    DayActivity {
        time: "Morning".to_string(),
        activity,
        description: "Pack your belongings and prepare for your final day.".to_string(),
        price: None,
    }
}

fn visit(attraction: &Attraction, time: &str) -> DayActivity {
    DayActivity {
        time: time.to_string(),
        activity: attraction.name.clone(),
        description: format!(
            "Visit this {} attraction ({:.1}★)",
            attraction.interest.join(", "),
            attraction.rating
        ),
        price: Some(price_label(attraction.price_fare)),
    }
}

pub fn price_label(fare: f64) -> String {
    if fare > 0.0 {
        format!("₹{}", fare.round() as i64)
    } else {
        "Free entry".to_string()
    }
}
