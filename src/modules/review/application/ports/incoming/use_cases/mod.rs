mod create_review;
mod delete_review;
mod get_review;
mod get_reviews;
mod update_review;

pub use create_review::{CreateReviewCommand, CreateReviewError, CreateReviewUseCase};
pub use delete_review::{DeleteReviewError, DeleteReviewUseCase};
pub use get_review::{GetReviewError, GetReviewUseCase};
pub use get_reviews::{GetReviewsError, GetReviewsUseCase};
pub use update_review::{UpdateReviewCommand, UpdateReviewError, UpdateReviewUseCase};
