//! # Configuration Service Module
//!
//! Routes everything under `/api/configs` to its handler.
//!
//! ## Sub-modules:
//! - `session`: resolves what the editor shows for a `GET`.
//! - `save`: creates or overwrites a stored configuration, then redirects to it.
//! - `files`: lists the stored configurations.
//! - `generate`: produces the seven per-language badge mappings.
//! - `copy_out`: one language's mapping as indented text.

mod copy_out;
mod files;
mod generate;
mod save;
mod session;

use actix_web::web::{get, post, scope, FormConfig};
use actix_web::Scope;

/// The base path for all configuration-related API endpoints.
pub const API_PATH: &str = "/api/configs";

/// Path of the session resource inside `API_PATH`.
pub const SESSION_PATH: &str = "/session";

/// Saved configurations travel as form fields and can be large.
const FORM_LIMIT: usize = 10 * 1024 * 1024;

/// Configures and returns the Actix `Scope` for all configuration routes.
///
/// # Registered Routes:
///
/// *   **`GET /session`**: `session::process`. Query `load_file`, `clear`, `new`, `msg`;
///     answers with a `SessionView`.
/// *   **`POST /session`**: `save::process`. Form fields `action` (`save` | `overwrite`),
///     `config_payload` and `overwrite_filename`; answers `303 See Other` to
///     `GET /session?load_file=...&msg=...` on success so a reload does not save twice.
/// *   **`GET /files`**: `files::process`. The store listing, newest first.
/// *   **`POST /generate`**: `generate::process`. Configuration JSON in, badge
///     mappings per language out.
/// *   **`POST /generate/{lang}`**: `copy_out::process`. Configuration JSON in,
///     four-space indented mapping for `lang` out.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(FormConfig::default().limit(FORM_LIMIT))
        .route(SESSION_PATH, get().to(session::process))
        .route(SESSION_PATH, post().to(save::process))
        .route("/files", get().to(files::process))
        .route("/generate", post().to(generate::process))
        .route("/generate/{lang}", post().to(copy_out::process))
}
