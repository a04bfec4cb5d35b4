pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_orders;
mod m20260715_000002_create_cakes;
mod m20260715_000003_create_daily_order_counter;
mod m20260716_000001_create_pricing_tables;
mod m20260716_000002_create_menu;
mod m20260716_000003_create_offers;
mod m20260801_000001_seed_pricing_defaults;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_orders::Migration),
            Box::new(m20260715_000002_create_cakes::Migration),
            Box::new(m20260715_000003_create_daily_order_counter::Migration),
            Box::new(m20260716_000001_create_pricing_tables::Migration),
            Box::new(m20260716_000002_create_menu::Migration),
            Box::new(m20260716_000003_create_offers::Migration),
            Box::new(m20260801_000001_seed_pricing_defaults::Migration),
        ]
    }
}
