pub mod controller;
pub mod normalize;
pub mod submission_model;
