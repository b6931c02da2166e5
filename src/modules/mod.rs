pub mod auth;
pub mod catalog;
pub mod comment;
pub mod email;
pub mod review;
