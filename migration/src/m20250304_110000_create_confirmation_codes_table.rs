use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One live code per email; re-issuing overwrites the row
        manager
            .create_table(
                Table::create()
                    .table(ConfirmationCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConfirmationCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConfirmationCodes::Email)
                            .string_len(254)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ConfirmationCodes::CodeHash)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConfirmationCodes::IssuedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ConfirmationCodes::Confirmed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // Expired-code sweeps
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_confirmation_codes_issued_at
                ON confirmation_codes (issued_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_confirmation_codes_issued_at;")
            .await?;

        manager
            .drop_table(Table::drop().table(ConfirmationCodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ConfirmationCodes {
    Table,
    Id,
    Email,
    CodeHash,
    IssuedAt,
    Confirmed,
}
