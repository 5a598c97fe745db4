use actix_web::{web, HttpResponse, Responder};
use common::badges::generate;
use common::model::configuration::Configuration;
use log::debug;

/// Actix web handler for `POST /api/configs/generate`.
///
/// Works on the configuration in the request body only; nothing is read from
/// or written to the store.
pub async fn process(payload: web::Json<Configuration>) -> impl Responder {
    let badges = generate(&payload);
    for (lang, products) in badges.iter() {
        debug!("{} badges generated with {} products", lang, products.len());
    }
    HttpResponse::Ok().json(badges)
}
