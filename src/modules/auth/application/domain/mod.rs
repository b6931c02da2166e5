pub mod entities;
pub mod policy;
