mod api_models;
mod error;
mod handlers;
mod pretty;
mod router;

pub use router::router;
