pub mod models;
pub mod resources;
pub mod routes;
