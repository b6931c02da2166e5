pub mod create_term;
pub mod delete_term;
pub mod get_title;
pub mod get_titles;
pub mod list_terms;
pub mod write_title;

pub use create_term::{create_category_handler, create_genre_handler};
pub use delete_term::{
    category_detail_not_allowed, delete_category_handler, delete_genre_handler,
    genre_detail_not_allowed,
};
pub use get_title::get_title_handler;
pub use get_titles::get_titles_handler;
pub use list_terms::{list_categories_handler, list_genres_handler};
pub use write_title::{
    create_title_handler, delete_title_handler, patch_title_handler, replace_title_handler,
};
