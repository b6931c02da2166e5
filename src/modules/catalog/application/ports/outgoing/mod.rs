pub mod title_query;
pub mod title_repository;
pub mod vocabulary_query;
pub mod vocabulary_repository;

pub use title_query::{TitleFilter, TitleQuery, TitleQueryError};
pub use title_repository::{PatchTitleData, TitleData, TitleRepository, TitleRepositoryError};
pub use vocabulary_query::{VocabularyQuery, VocabularyQueryError};
pub use vocabulary_repository::{VocabularyRepository, VocabularyRepositoryError};
