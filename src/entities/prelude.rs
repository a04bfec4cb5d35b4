pub use super::cake_options::Entity as CakeOptions;
pub use super::cakes::Entity as Cakes;
pub use super::daily_order_counter::Entity as DailyOrderCounter;
pub use super::extra_pricing_rules::Entity as ExtraPricingRules;
pub use super::menu::Entity as Menu;
pub use super::offers::Entity as Offers;
pub use super::orders::Entity as Orders;
