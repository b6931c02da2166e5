pub mod create_comment;
pub mod delete_comment;
pub mod get_comments;
pub mod update_comment;

pub use create_comment::create_comment_handler;
pub use delete_comment::delete_comment_handler;
pub use get_comments::{get_comment_handler, get_comments_handler};
pub use update_comment::{patch_comment_handler, replace_comment_handler};
