//! Create `todo_item` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoItem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TodoItem::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len_null(TodoItem::Name, 256))
                    .col(boolean(TodoItem::IsComplete).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TodoItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TodoItem {
    Table,
    Id,
    Name,
    IsComplete,
}
