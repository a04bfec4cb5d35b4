use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cakes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cakes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()"),
                    )
                    .col(
                        ColumnDef::new(Cakes::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cakes::Phone)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cakes::TotalPrice)
                            .decimal()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cakes::ReferenceImageUrl)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Cakes::DeliveryTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cakes::Customization)
                            .json_binary() // jsonb
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cakes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cakes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cakes {
    Table,
    Id,
    Name,
    Phone,
    TotalPrice,
    ReferenceImageUrl,
    DeliveryTime,
    Customization,
    CreatedAt,
}
