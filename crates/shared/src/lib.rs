pub mod models;
pub mod shelf;
