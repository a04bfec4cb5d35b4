use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per calendar date, created lazily by the first order of
        // the day
        manager
            .create_table(
                Table::create()
                    .table(DailyOrderCounter::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyOrderCounter::OrderDate)
                            .date()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DailyOrderCounter::Counter)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyOrderCounter::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DailyOrderCounter {
    Table,
    OrderDate,
    Counter,
}
