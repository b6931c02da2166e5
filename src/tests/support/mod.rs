pub mod app_state_builder;
pub mod auth_helper;
pub mod catalog_mocks;
pub mod fixtures;
pub mod in_memory;
