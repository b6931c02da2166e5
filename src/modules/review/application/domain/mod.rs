pub mod entities;
pub mod rating;
