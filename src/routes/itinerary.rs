use actix_web::{web, HttpResponse, Responder};
use mongodb::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::models::itinerary::{ItineraryCity, ItineraryRequest};
use crate::services::day_plan_service::generate_daily_plans;
use crate::services::destination_store::MongoDestinationStore;
use crate::services::planner_service::{ItineraryPlanner, PlannerConfig};

/*
    /api/itineraries/generate
*/
pub async fn generate(
    data: web::Data<Arc<Client>>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    let client = data.get_ref().clone();
    let planner = ItineraryPlanner::new(MongoDestinationStore::new(client));

    // The planner folds every failure into the envelope, so the HTTP
    // status is always 200 and callers branch on the success flag.
    let result = planner.generate(&input.into_inner()).await;
    HttpResponse::Ok().json(result)
}

#[derive(Debug, Deserialize)]
pub struct DayPlanRequest {
    pub city: ItineraryCity,
    pub duration: u32,
}

/*
    /api/itineraries/day-plan

    Generated lazily for the one candidate the caller is viewing; the
    generate endpoint never precomputes these.
*/
pub async fn day_plan(input: web::Json<DayPlanRequest>) -> impl Responder {
    let request = input.into_inner();
    if request.duration < 1 {
        return HttpResponse::BadRequest().body("Trip duration must be at least 1 day");
    }

    let plans = generate_daily_plans(&request.city, request.duration, &PlannerConfig::default());
    HttpResponse::Ok().json(plans)
}
