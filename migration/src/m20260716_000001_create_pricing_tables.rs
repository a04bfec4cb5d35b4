use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create cake_options table: one row per selectable attribute value
        manager
            .create_table(
                Table::create()
                    .table(CakeOptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CakeOptions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CakeOptions::OptionType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CakeOptions::OptionName)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CakeOptions::BasePrice)
                            .decimal()
                            .not_null()
                            .default("0"),
                    )
                    .to_owned(),
            )
            .await?;

        // option_name is unique within its option_type
        manager
            .create_index(
                Index::create()
                    .name("idx_cake_options_type_name")
                    .table(CakeOptions::Table)
                    .col(CakeOptions::OptionType)
                    .col(CakeOptions::OptionName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create extra_pricing_rules table: named surcharges looked up by key
        manager
            .create_table(
                Table::create()
                    .table(ExtraPricingRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExtraPricingRules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExtraPricingRules::RuleName)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ExtraPricingRules::Price)
                            .decimal()
                            .not_null()
                            .default("0"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExtraPricingRules::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CakeOptions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CakeOptions {
    Table,
    Id,
    OptionType,
    OptionName,
    BasePrice,
}

#[derive(Iden)]
enum ExtraPricingRules {
    Table,
    Id,
    RuleName,
    Price,
}
