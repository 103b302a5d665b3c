pub mod backend;
pub mod error;
pub mod mock;
pub mod service_model;
