use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use std::sync::Arc;

use wayfarer_api::db::mongo::create_mongo_client;
use wayfarer_api::{middleware, routes};

pub struct TestApp {
    pub client: Arc<mongodb::Client>,
}

impl TestApp {
    pub async fn new() -> Self {
        let mongo_uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = create_mongo_client(&mongo_uri).await;

        Self { client }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(self.client.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api").service(
                    web::scope("/itineraries")
                        .route("/generate", web::post().to(routes::itinerary::generate))
                        .route("/day-plan", web::post().to(routes::itinerary::day_plan))
                        .service(
                            web::scope("/saved")
                                .wrap(middleware::auth::AuthMiddleware)
                                .route("", web::post().to(routes::saved::save))
                                .route("", web::get().to(routes::saved::get_all))
                                .route("/{id}", web::delete().to(routes::saved::delete)),
                        ),
                ),
            )
    }
}
