use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use tomo_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on http://{host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::chat)
            .service(handlers::ruby)
            .service(handlers::submit_attempt)
            .service(handlers::get_genre_stats)
            .service(handlers::get_subfield_stats)
            .service(handlers::get_personalities)
            .service(handlers::health_check)
    })
    .bind((host, port))?
    .run()
    .await
}
