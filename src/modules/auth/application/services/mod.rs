pub mod confirmation;
pub mod hash;
