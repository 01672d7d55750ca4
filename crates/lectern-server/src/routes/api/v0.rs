pub(crate) mod admin;
pub(crate) mod cart;
pub(crate) mod courses;
pub(crate) mod enrollments;
pub(crate) mod instructor;
pub(crate) mod status;
pub(crate) mod user;
