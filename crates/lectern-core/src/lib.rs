pub mod account;
pub mod admin;
pub mod analytics;
pub mod authoring;
pub mod cart;
pub mod catalog;
pub mod enrollment;
pub mod error;
pub mod progress;
pub mod review;
pub mod status;
