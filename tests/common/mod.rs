#![allow(dead_code)]

pub mod backends;
pub mod mock_server;
