use crate::session_controller::SessionController;
use crate::store::ConfigStore;
use actix_web::{web, HttpResponse, Responder};
use common::requests::LoadQuery;
use log::error;

/// Actix web handler for `GET /api/configs/session`.
///
/// Always answers `200 OK` with a `SessionView`; load failures are reported
/// inside the view.
pub async fn process(store: web::Data<ConfigStore>, query: web::Query<LoadQuery>) -> impl Responder {
    let store = store.into_inner();
    let query = query.into_inner();

    match web::block(move || SessionController::new(&store).resolve(&query)).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => {
            error!("Session resolution did not complete: {}", e);
            HttpResponse::InternalServerError().body(format!("Error resolving session: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::services::configs::configure_routes;
    use crate::store::ConfigStore;
    use actix_web::{test, web, App};
    use common::model::session::{SessionState, SessionView};
    use std::fs;

    #[actix_web::test]
    async fn empty_store_returns_fresh_session() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("logs"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/configs/session").to_request();
        let view: SessionView = test::call_and_read_body_json(&app, req).await;

        assert_eq!(view.state, SessionState::FreshSession);
        assert_eq!(view.configuration.config_name, "Badge_Setup_1");
        assert_eq!(view.configuration.groups.len(), 1);
    }

    #[actix_web::test]
    async fn traversal_in_query_never_leaves_the_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store_dir = temp_dir.path().join("logs");
        fs::create_dir(&store_dir).unwrap();
        fs::write(store_dir.join("Real_20250101_000000.json"), r#"{"configName": "Real"}"#).unwrap();
        fs::write(temp_dir.path().join("secret.json"), r#"{"configName": "Secret"}"#).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ConfigStore::new(&store_dir)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/configs/session?load_file=..%2Fsecret.json")
            .to_request();
        let view: SessionView = test::call_and_read_body_json(&app, req).await;

        assert_eq!(view.state, SessionState::ChooserShown);
        assert_ne!(view.configuration.config_name, "Secret");
        assert!(view.bound_filename.is_none());
        assert!(view.has_error());
    }
}
