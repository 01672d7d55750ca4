mod client;
pub mod error;

pub use client::base::ApiUrl;
pub use client::base::Config;
pub use client::fallback::{course_or_mock, courses_or_mock};
pub use client::simple::SimpleClient;
pub use client::token::TokenClient;

pub use client::base::BaseClient;
pub use client::base::PublicClient;
pub use client::base::SecureClient;
