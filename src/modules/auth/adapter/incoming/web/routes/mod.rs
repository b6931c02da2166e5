pub mod create_user;
pub mod delete_user;
pub mod fetch_user;
pub mod get_user;
pub mod list_users;
pub mod obtain_token;
pub mod request_code;
pub mod update_profile;
pub mod update_user;

pub use create_user::create_user_handler;
pub use delete_user::delete_user_handler;
pub use fetch_user::get_own_profile_handler;
pub use get_user::get_user_handler;
pub use list_users::list_users_handler;
pub use obtain_token::{obtain_token_handler, ObtainTokenRequest};
pub use request_code::{request_code_handler, RequestCodeRequest, RequestCodeResponse};
pub use update_profile::update_own_profile_handler;
pub use update_user::update_user_handler;
