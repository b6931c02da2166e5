pub mod confirmation_codes;
pub mod users;
