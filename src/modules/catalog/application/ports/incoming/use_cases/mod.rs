mod create_term;
mod create_title;
mod delete_term;
mod delete_title;
mod get_terms;
mod get_title;
mod get_titles;
mod update_title;

pub use create_term::{CreateTermCommand, CreateTermError, CreateTermUseCase};
pub use create_title::{CreateTitleError, CreateTitleUseCase, TitleCommand};
pub use delete_term::{DeleteTermError, DeleteTermUseCase};
pub use delete_title::{DeleteTitleError, DeleteTitleUseCase};
pub use get_terms::{GetTermsError, GetTermsUseCase};
pub use get_title::{GetTitleError, GetTitleUseCase};
pub use get_titles::{GetTitlesError, GetTitlesUseCase};
pub use update_title::{PatchTitleCommand, PatchTitleUseCase, ReplaceTitleUseCase, UpdateTitleError};
