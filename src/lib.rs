pub mod config;
pub mod db;
pub mod events;
pub mod routes;
pub mod types;
pub mod utils;
