use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Menu::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()"),
                    )
                    .col(
                        ColumnDef::new(Menu::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Menu::Price)
                            .decimal()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Menu::Description)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Menu::ImageUrl)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Menu::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Menu::Category)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Menu::Diet)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Menu::StockQuantity)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Menu::Parcel)
                            .decimal()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The menu listing filters on availability and groups by category
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_category")
                    .table(Menu::Table)
                    .col(Menu::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menu::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Menu {
    Table,
    Id,
    Name,
    Price,
    Description,
    ImageUrl,
    IsAvailable,
    Category,
    Diet,
    StockQuantity,
    Parcel,
}
