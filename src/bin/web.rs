//! Single binary web server: bracket REST API under /api, front-end pages from STATIC_DIR.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:3000 by default. Override with env: HOST, PORT, DATA_FILE, STATIC_DIR, UPLOAD_DIR.

use actix_files::Files;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use bracket_tournament_web::{web, JsonFileStore, ServerConfig, TournamentService};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    std::fs::create_dir_all(&config.upload_dir)?;

    let service = TournamentService::new(JsonFileStore::new(&config.data_file));
    let created = service.initialize_if_absent().map_err(io::Error::other)?;
    if !created {
        log::info!("Using tournament data at {}", config.data_file.display());
    }
    let state = Data::new(service);

    let serve_static = config.static_dir.is_dir();
    if !serve_static {
        log::warn!(
            "Static directory {} not found; serving API only",
            config.static_dir.display()
        );
    }

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let upload_dir = config.upload_dir.clone();
    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        let app = App::new()
            .wrap(web::cors())
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(web::upload_config(upload_dir.clone()))
            .configure(web::configure);
        if serve_static {
            app.service(Files::new("/", static_dir.clone()).index_file("index.html"))
        } else {
            app
        }
    })
    .bind(bind)?
    .run()
    .await
}
