pub mod app_state;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod guards;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

#[cfg(test)]
pub mod test_utils;
