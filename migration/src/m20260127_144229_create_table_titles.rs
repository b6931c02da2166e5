use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // titles
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Titles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Titles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Titles::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Titles::Year).integer().not_null())
                    .col(ColumnDef::new(Titles::Rating).small_integer().null())
                    .col(
                        ColumnDef::new(Titles::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Titles::CategoryId).uuid().null())
                    // FK → categories; a deleted category leaves the title uncategorized
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_titles_category_id")
                            .from(Titles::Table, Titles::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE titles
                ADD CONSTRAINT chk_titles_rating
                CHECK (rating IS NULL OR rating BETWEEN 0 AND 10);
                "#,
            )
            .await?;

        // =====================================================
        // title_genres join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(TitleGenres::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TitleGenres::TitleId).uuid().not_null())
                    .col(ColumnDef::new(TitleGenres::GenreId).uuid().not_null())
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(TitleGenres::TitleId)
                            .col(TitleGenres::GenreId),
                    )
                    // FK → titles
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_title_genres_title_id")
                            .from(TitleGenres::Table, TitleGenres::TitleId)
                            .to(Titles::Table, Titles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → genres
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_title_genres_genre_id")
                            .from(TitleGenres::Table, TitleGenres::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Title filters: category, year, name
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_titles_category_id ON titles (category_id);
                CREATE INDEX idx_titles_year ON titles (year);
                CREATE INDEX idx_titles_name ON titles (name);
                "#,
            )
            .await?;

        // Genre filter
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_title_genres_genre_id
                ON title_genres (genre_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_title_genres_genre_id;
                DROP INDEX IF EXISTS idx_titles_category_id;
                DROP INDEX IF EXISTS idx_titles_year;
                DROP INDEX IF EXISTS idx_titles_name;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TitleGenres::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Titles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Titles {
    Table,
    Id,
    Name,
    Year,
    Rating,
    Description,
    CategoryId,
}

#[derive(DeriveIden)]
enum TitleGenres {
    Table,
    TitleId,
    GenreId,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Genres {
    Table,
    Id,
}
