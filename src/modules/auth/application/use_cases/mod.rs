pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod obtain_token;
pub mod request_confirmation_code;
pub mod update_profile;
pub mod update_user;
