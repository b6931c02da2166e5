mod create_term_service;
mod create_title_service;
mod delete_term_service;
mod delete_title_service;
mod get_terms_service;
mod get_title_service;
mod get_titles_service;
mod update_title_service;

pub use create_term_service::CreateTermService;
pub use create_title_service::CreateTitleService;
pub use delete_term_service::DeleteTermService;
pub use delete_title_service::DeleteTitleService;
pub use get_terms_service::GetTermsService;
pub use get_title_service::GetTitleService;
pub use get_titles_service::GetTitlesService;
pub use update_title_service::UpdateTitleService;
