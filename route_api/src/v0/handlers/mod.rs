pub mod airports;
pub mod routes;
