use super::{API_PATH, SESSION_PATH};
use crate::session_controller::{SaveOutcome, SessionController};
use crate::store::ConfigStore;
use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use chrono::Local;
use common::requests::SaveForm;
use log::error;
use url::form_urlencoded;

/// Actix web handler for `POST /api/configs/session`.
///
/// - On success: `303 See Other` to the load URL of the written file, carrying
///   the success message, so that reloading the page does not repeat the write.
/// - On rejection: the error status with the fallback `SessionView` as body.
pub async fn process(store: web::Data<ConfigStore>, form: web::Form<SaveForm>) -> impl Responder {
    let store = store.into_inner();
    let form = form.into_inner();
    let now = Local::now();

    match web::block(move || SessionController::new(&store).save(&form, now)).await {
        Ok(SaveOutcome::Saved { filename, message }) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, load_url(&filename, &message)))
            .finish(),
        Ok(SaveOutcome::Rejected { error, view }) => {
            HttpResponse::build(error.status_code()).json(view)
        }
        Err(e) => {
            error!("Save did not complete: {}", e);
            HttpResponse::InternalServerError().body(format!("Error saving configuration: {}", e))
        }
    }
}

/// `GET` URL that loads `filename` and shows `message`.
fn load_url(filename: &str, message: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("load_file", filename)
        .append_pair("msg", message)
        .finish();
    format!("{}{}?{}", API_PATH, SESSION_PATH, query)
}
