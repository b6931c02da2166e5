pub mod create_review;
pub mod delete_review;
pub mod get_review;
pub mod get_reviews;
pub mod update_review;

pub use create_review::create_review_handler;
pub use delete_review::delete_review_handler;
pub use get_review::get_review_handler;
pub use get_reviews::get_reviews_handler;
pub use update_review::{patch_review_handler, replace_review_handler};
