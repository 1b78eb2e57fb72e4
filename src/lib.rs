#![doc(test(attr(deny(warnings))))]

//! Registro Core turns a bill form plus imported reference tables into
//! bank-formatted posting rows, accumulated in a session grid that a
//! spreadsheet collaborator renders and exports.

pub mod amount;
pub mod core;
pub mod domain;
pub mod errors;
pub mod export;
pub mod session;
pub mod utils;

pub use errors::CoreError;
pub use session::Session;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Registro Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
