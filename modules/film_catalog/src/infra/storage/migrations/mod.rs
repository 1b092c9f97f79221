//! Database migrations for the film catalog

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260806_000001_create_filmes::Migration)]
    }
}

mod m20260806_000001_create_filmes {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Filmes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Filmes::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Filmes::Title).string().not_null())
                        .col(ColumnDef::new(Filmes::Rating).double().not_null())
                        .col(
                            ColumnDef::new(Filmes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Filmes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Filmes::CompletedAt).timestamp_with_time_zone())
                        .col(ColumnDef::new(Filmes::DeletedAt).timestamp_with_time_zone())
                        .to_owned(),
                )
                .await?;

            // Reads filter on the tombstone column
            manager
                .create_index(
                    Index::create()
                        .name("idx_filmes_deleted_at")
                        .table(Filmes::Table)
                        .col(Filmes::DeletedAt)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Filmes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Filmes {
        Table,
        Id,
        Title,
        Rating,
        CreatedAt,
        UpdatedAt,
        CompletedAt,
        DeletedAt,
    }
}
