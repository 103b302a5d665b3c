pub mod cli;
pub mod form;
pub mod logging;
pub mod output;
pub mod service;
pub mod submission;
pub mod trace;
