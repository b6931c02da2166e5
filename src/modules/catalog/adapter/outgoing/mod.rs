pub mod sea_orm_entity;
pub mod title_query_postgres;
pub mod title_repository_postgres;
pub mod vocabulary_query_postgres;
pub mod vocabulary_repository_postgres;

mod title_loader;
