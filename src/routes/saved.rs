use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Client;
use std::sync::Arc;

use crate::middleware::auth::Claims;
use crate::models::saved::SavedItinerary;

fn saved_collection(client: &Client) -> mongodb::Collection<SavedItinerary> {
    client.database("Travelers").collection("SavedItineraries")
}

/*
    POST /api/itineraries/saved

    Saving an entry whose id already exists for this user replaces it.
*/
pub async fn save(
    claims: web::ReqData<Claims>,
    data: web::Data<Arc<Client>>,
    input: web::Json<SavedItinerary>,
) -> impl Responder {
    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user id"),
    };

    let mut entry = input.into_inner();
    if entry.id.is_empty() {
        entry.id = SavedItinerary::new_id();
    }
    entry.user_id = Some(user_id);
    entry.saved_at = Some(chrono::Utc::now());

    let collection = saved_collection(&data);
    let filter = doc! { "_id": entry.id.clone(), "user_id": user_id };

    match collection.replace_one(filter, &entry).upsert(true).await {
        Ok(_) => HttpResponse::Ok().json(entry),
        Err(err) => {
            eprintln!("Failed to save itinerary: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to save itinerary.")
        }
    }
}

/*
    GET /api/itineraries/saved
*/
pub async fn get_all(claims: web::ReqData<Claims>, data: web::Data<Arc<Client>>) -> impl Responder {
    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user id"),
    };

    let collection = saved_collection(&data);
    let sort = doc! { "saved_at": -1 };

    match collection.find(doc! { "user_id": user_id }).sort(sort).await {
        Ok(cursor) => match cursor.try_collect::<Vec<SavedItinerary>>().await {
            Ok(entries) => HttpResponse::Ok().json(entries),
            Err(err) => {
                eprintln!("Failed to collect saved itineraries: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect saved itineraries.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find saved itineraries: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find saved itineraries.")
        }
    }
}

/*
    DELETE /api/itineraries/saved/{id}
*/
pub async fn delete(
    claims: web::ReqData<Claims>,
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user id"),
    };

    let entry_id = path.into_inner();
    let collection = saved_collection(&data);
    let filter = doc! { "_id": entry_id, "user_id": user_id };

    match collection.delete_one(filter).await {
        Ok(outcome) if outcome.deleted_count == 0 => {
            HttpResponse::NotFound().body("Saved itinerary not found")
        }
        Ok(_) => HttpResponse::Ok().body("Saved itinerary deleted"),
        Err(err) => {
            eprintln!("Failed to delete saved itinerary: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete saved itinerary.")
        }
    }
}
