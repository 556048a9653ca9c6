use std::env;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wayfarer_api::{db, middleware, routes};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let mongo_uri = env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(client.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api").service(
                    web::scope("/itineraries")
                        .route("/generate", web::post().to(routes::itinerary::generate))
                        .route("/day-plan", web::post().to(routes::itinerary::day_plan))
                        // Protected routes
                        .service(
                            web::scope("/saved")
                                .wrap(middleware::auth::AuthMiddleware)
                                .route("", web::post().to(routes::saved::save))
                                .route("", web::get().to(routes::saved::get_all))
                                .route("/{id}", web::delete().to(routes::saved::delete)),
                        ),
                ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
