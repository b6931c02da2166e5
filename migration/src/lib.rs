pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250304_110000_create_confirmation_codes_table;
mod m20260127_144214_create_table_vocabularies;
mod m20260127_144229_create_table_titles;
mod m20260202_230522_create_table_reviews;
mod m20260202_231146_create_table_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250304_110000_create_confirmation_codes_table::Migration),
            Box::new(m20260127_144214_create_table_vocabularies::Migration),
            Box::new(m20260127_144229_create_table_titles::Migration),
            Box::new(m20260202_230522_create_table_reviews::Migration),
            Box::new(m20260202_231146_create_table_comments::Migration),
        ]
    }
}
