pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod service;
pub mod validation;
