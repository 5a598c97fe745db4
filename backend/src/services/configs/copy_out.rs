use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};
use common::badges::generate;
use common::model::configuration::Configuration;
use common::model::language::Language;
use log::{debug, error};

/// Actix web handler for `POST /api/configs/generate/{lang}`.
///
/// Answers with one language's mapping as four-space indented JSON text, the
/// form it is pasted into the storefront in.
pub async fn process(lang: web::Path<String>, payload: web::Json<Configuration>) -> impl Responder {
    let Some(lang) = Language::from_code(&lang) else {
        return HttpResponse::NotFound().body(format!("Unknown language '{}'", lang));
    };

    let badges = generate(&payload);
    debug!(
        "Copy-out for {} with {} products",
        lang,
        badges.product_count(lang)
    );
    match badges.to_pretty_json(lang) {
        Ok(text) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(text),
        Err(e) => {
            error!("Could not render {} badges: {}", lang, e);
            HttpResponse::InternalServerError().body(format!("Error rendering badges: {}", e))
        }
    }
}
