pub mod form_model;
pub mod form_state;
