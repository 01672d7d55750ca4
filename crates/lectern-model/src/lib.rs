pub mod analytics;
pub mod cart;
pub mod course;
pub mod enrollment;
pub mod error;
pub mod login;
pub mod price;
pub mod progress;
pub mod rating;
pub mod review;
pub mod status;
pub mod user;
