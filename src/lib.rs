pub mod app;
pub mod artists;
pub mod core;
pub mod error;
pub mod graph;
pub mod model;
pub mod playlist;
pub mod queue;
pub mod search;
pub mod store;
