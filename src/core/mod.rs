//! Service layer for the grid workflow.

pub mod services;
