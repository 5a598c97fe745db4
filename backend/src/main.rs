mod config;
mod error;
mod services;
mod session_controller;
mod store;

use crate::config::ServerConfig;
use crate::store::ConfigStore;
use actix_files::Files;
use actix_web::{web, App, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().body("Not Found")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::parse();
    env_logger::init_from_env(Env::default().default_filter_or(config.log_level.as_str()));
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let store = ConfigStore::new(&config.store_dir);
    if let Err(e) = store.ensure_directory() {
        // Requests keep working with an empty listing and report the failure.
        warn!("{}", e);
    }

    let static_dir = config.static_dir.clone();
    if !static_dir.is_dir() {
        warn!(
            "Static directory {} not found, serving the API only",
            static_dir.display()
        );
    }

    info!("Storing configurations in {}", store.dir().display());
    info!("Server running at {}", url);

    let store = web::Data::new(store);
    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(store.clone())
            .service(services::configs::configure_routes());
        let app = if static_dir.is_dir() {
            app.service(Files::new("/", static_dir.clone()).index_file("index.html"))
        } else {
            app
        };
        app.default_service(web::route().to(not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
