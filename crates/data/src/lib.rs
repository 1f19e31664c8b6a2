pub mod audit;
pub mod auth;
pub mod datetime;
pub mod person;
pub mod plan;
pub mod stats;
pub mod user;
