//! Per-request session decisions.
//!
//! The controller answers two questions for every request, with no state kept
//! between requests:
//! - `load`: which presentation state a `GET` lands in (chooser, fresh session,
//!   or a session loaded from and bound to a stored file).
//! - `save`: whether a `POST` creates a new file or overwrites the bound one,
//!   and what to show when the save is rejected.
//!
//! Each request takes its own store listing. The filename a client is bound to
//! travels in the request (`load_file`, `overwrite_filename`) and is checked
//! against that listing before any file is touched.

mod load;
mod save;

pub use save::SaveOutcome;

use crate::store::ConfigStore;

pub struct SessionController<'a> {
    store: &'a ConfigStore,
}

impl<'a> SessionController<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }
}
