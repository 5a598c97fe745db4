use crate::store::ConfigStore;
use actix_web::{web, HttpResponse, Responder};
use log::error;

/// Actix web handler for `GET /api/configs/files`.
pub async fn process(store: web::Data<ConfigStore>) -> impl Responder {
    let store = store.into_inner();
    match web::block(move || store.list_files()).await {
        Ok(files) => HttpResponse::Ok().json(files),
        Err(e) => {
            error!("Listing did not complete: {}", e);
            HttpResponse::InternalServerError().body(format!("Error listing configurations: {}", e))
        }
    }
}
