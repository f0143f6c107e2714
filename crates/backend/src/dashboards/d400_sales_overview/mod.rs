pub mod repository;
pub mod service;
pub mod state;

pub use state::SalesOverviewState;
