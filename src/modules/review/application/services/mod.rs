mod create_review_service;
mod delete_review_service;
mod get_review_service;
mod get_reviews_service;
mod update_review_service;

pub use create_review_service::CreateReviewService;
pub use delete_review_service::DeleteReviewService;
pub use get_review_service::GetReviewService;
pub use get_reviews_service::GetReviewsService;
pub use update_review_service::UpdateReviewService;
