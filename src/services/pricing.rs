//! Rule-driven cake pricing engine
//!
//! Pure computation: a cake selection plus a snapshot of the option/rule
//! tables in, an itemized breakdown plus total out. The breakdown and the
//! total come from the same pass, so `total == Σ line.amount` holds for every
//! input. No I/O here; callers load the tables and hand them over.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::entities::{cake_options, extra_pricing_rules};

const FONDANT: &str = "Fondant";
const SEMI_FONDANT: &str = "Semi-Fondant";
const EDIBLE_TOYS: &str = "Edible Toys";

/// "Edible Toys" units given away when the promotion applies
const FREE_EDIBLE_TOYS: u32 = 5;
/// Promotion needs Fondant icing at or above this weight
const PROMO_MIN_WEIGHT_KG: Decimal = dec!(4);

const DEFAULT_EGGLESS_PER_KG: Decimal = dec!(100);
const DEFAULT_CUSTOM_SHAPE_PER_KG: Decimal = dec!(200);
const DEFAULT_PHOTO_PRICE: Decimal = dec!(250);
const DEFAULT_FLOWER_PRICE: Decimal = dec!(50);
const DEFAULT_FONDANT_PER_KG: Decimal = dec!(700);
const DEFAULT_SEMI_FONDANT_PER_KG: Decimal = dec!(500);

lazy_static! {
    /// Fallback flavour price-per-kg, used only when the option table has no
    /// row for the flavour. Unknown names price at zero.
    static ref FALLBACK_FLAVOUR_PRICES: BTreeMap<&'static str, Decimal> = {
        let mut m = BTreeMap::new();
        m.insert("Vanilla", dec!(500));
        m.insert("Pineapple", dec!(500));
        m.insert("Chocolate", dec!(550));
        m.insert("Butterscotch", dec!(550));
        m.insert("Black Forest", dec!(600));
        m.insert("Blueberry", dec!(650));
        m.insert("Red Velvet", dec!(700));
        m
    };
}

/// In-memory snapshot of `cake_options` and `extra_pricing_rules`
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    options: BTreeMap<(String, String), Decimal>,
    rules: BTreeMap<String, Decimal>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(
        options: &[cake_options::Model],
        rules: &[extra_pricing_rules::Model],
    ) -> Self {
        let mut book = Self::new();
        for option in options {
            book.add_option(&option.option_type, &option.option_name, option.base_price);
        }
        for rule in rules {
            book.add_rule(&rule.rule_name, rule.price);
        }
        book
    }

    pub fn add_option(&mut self, option_type: &str, option_name: &str, base_price: Decimal) {
        self.options
            .insert((option_type.to_string(), option_name.to_string()), base_price);
    }

    pub fn add_rule(&mut self, rule_name: &str, price: Decimal) {
        self.rules.insert(rule_name.to_string(), price);
    }

    pub fn option_price(&self, option_type: &str, option_name: &str) -> Option<Decimal> {
        self.options
            .get(&(option_type.to_string(), option_name.to_string()))
            .copied()
    }

    pub fn has_option(&self, option_type: &str, option_name: &str) -> bool {
        self.option_price(option_type, option_name).is_some()
    }

    /// Price of the name-wise first option of a type (deterministic because
    /// the map is ordered)
    pub fn first_option_of_type(&self, option_type: &str) -> Option<Decimal> {
        self.options
            .iter()
            .find(|((ty, _), _)| ty == option_type)
            .map(|(_, price)| *price)
    }

    pub fn rule_price(&self, rule_name: &str) -> Option<Decimal> {
        self.rules.get(rule_name).copied()
    }

    pub fn has_rule(&self, rule_name: &str) -> bool {
        self.rules.contains_key(rule_name)
    }
}

/// One toy choice with its quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToySelection {
    pub name: String,
    pub count: u32,
}

/// Everything the customer picked that affects price
#[derive(Debug, Clone, Default)]
pub struct CakeSelection {
    pub weight_kg: Decimal,
    pub icing: Option<String>,
    pub flavour: Option<String>,
    pub cake_type: Option<String>,
    pub shape: Option<String>,
    pub with_egg: bool,
    pub photo_count: u32,
    pub flowers: u32,
    pub toys: Vec<ToySelection>,
}

/// One contributing charge, rounded to 2 decimal places
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLine {
    pub label: String,
    pub amount: Decimal,
}

/// Itemized breakdown plus total; the total is the exact sum of the lines
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub breakdown: Vec<PriceLine>,
    pub total: Decimal,
}

/// How the rule table prices an icing's structural surcharge
#[derive(Debug, Clone, PartialEq)]
enum IcingSurcharge {
    /// Per-kg rate multiplied by weight (current revision)
    PerKg(Decimal),
    /// Weight-banded flat rules ("<Icing>_1_1.5kg", ...), legacy shape
    Banded,
    None,
}

/// The rule table is the source of truth: a "<Icing>_per_kg" row wins, any
/// banded row switches to the legacy mode, and only Fondant/Semi-Fondant get
/// the built-in per-kg defaults when the table encodes neither shape.
fn icing_surcharge(book: &PriceBook, icing: &str) -> IcingSurcharge {
    if let Some(rate) = book.rule_price(&format!("{icing}_per_kg")) {
        return IcingSurcharge::PerKg(rate);
    }
    let banded = ["_1_1.5kg", "_2_4kg", "_5kg_and_above"]
        .iter()
        .any(|suffix| book.has_rule(&format!("{icing}{suffix}")));
    if banded {
        return IcingSurcharge::Banded;
    }
    match icing {
        FONDANT => IcingSurcharge::PerKg(DEFAULT_FONDANT_PER_KG),
        SEMI_FONDANT => IcingSurcharge::PerKg(DEFAULT_SEMI_FONDANT_PER_KG),
        _ => IcingSurcharge::None,
    }
}

/// Band lookup for the legacy mode. Weights strictly between the named bands
/// (e.g. 1.75kg) carry no tier surcharge.
fn banded_rule(icing: &str, weight: Decimal) -> Option<(String, &'static str)> {
    if weight >= dec!(1) && weight <= dec!(1.5) {
        Some((format!("{icing}_1_1.5kg"), "1-1.5kg"))
    } else if weight >= dec!(2) && weight <= dec!(4) {
        Some((format!("{icing}_2_4kg"), "2-4kg"))
    } else if weight >= dec!(5) {
        Some((format!("{icing}_5kg_and_above"), "5kg+"))
    } else {
        None
    }
}

fn push_line(lines: &mut Vec<PriceLine>, label: String, amount: Decimal) {
    let amount = amount.round_dp(2);
    if !amount.is_zero() {
        lines.push(PriceLine { label, amount });
    }
}

/// Compute the itemized quote for a selection.
///
/// Missing or zero-priced options contribute 0, never an error. Weight is
/// taken as-is: minimum-weight gating (Fondant ≥ 1.5kg and friends) is a
/// caller-side concern and any non-negative weight prices correctly here.
pub fn price_cake(selection: &CakeSelection, book: &PriceBook) -> Quote {
    let weight = selection.weight_kg;
    let mut lines: Vec<PriceLine> = Vec::new();

    // Base price: flavour rate per kg times weight
    if let Some(flavour) = &selection.flavour {
        let per_kg = book
            .option_price("flavor", flavour)
            .or_else(|| FALLBACK_FLAVOUR_PRICES.get(flavour.as_str()).copied())
            .unwrap_or(Decimal::ZERO);
        push_line(
            &mut lines,
            format!("{flavour} flavour ({weight}kg)"),
            per_kg * weight,
        );
    }

    let icing_mode = selection
        .icing
        .as_deref()
        .map(|icing| icing_surcharge(book, icing));

    // Structural icing surcharge, per-kg mode
    if let (Some(icing), Some(IcingSurcharge::PerKg(rate))) =
        (selection.icing.as_deref(), &icing_mode)
    {
        push_line(
            &mut lines,
            format!("{icing} icing ({weight}kg)"),
            *rate * weight,
        );
    }

    // Eggless surcharge, per kg
    if !selection.with_egg {
        let per_kg = book
            .rule_price("Eggless")
            .unwrap_or(DEFAULT_EGGLESS_PER_KG);
        push_line(
            &mut lines,
            format!("Eggless charge ({weight}kg)"),
            per_kg * weight,
        );
    }

    // Shape: flat, except "custom" shapes which price per kg
    if let Some(shape) = &selection.shape {
        if shape.to_lowercase().contains("custom") {
            let rate = book
                .option_price("shape", shape)
                .filter(|price| !price.is_zero())
                .unwrap_or(DEFAULT_CUSTOM_SHAPE_PER_KG);
            push_line(
                &mut lines,
                format!("Shape ({shape}, {weight}kg)"),
                rate * weight,
            );
        } else if let Some(price) = book.option_price("shape", shape) {
            push_line(&mut lines, format!("Shape ({shape})"), price);
        }
    }

    // Cake style: priced iff a matching option row exists
    if let Some(style) = &selection.cake_type {
        if let Some(price) = book.option_price("cake_type", style) {
            push_line(&mut lines, format!("Cake style ({style})"), price);
        }
    }

    // Icing tier surcharge, legacy weight-banded mode
    if let (Some(icing), Some(IcingSurcharge::Banded)) = (selection.icing.as_deref(), &icing_mode)
    {
        if let Some((rule_name, band)) = banded_rule(icing, weight) {
            push_line(
                &mut lines,
                format!("{icing} icing ({band})"),
                book.rule_price(&rule_name).unwrap_or(Decimal::ZERO),
            );
        }
    }

    // Photo surcharge: one unit per started pair of photos
    if selection.photo_count > 0 {
        let unit = book
            .rule_price("Photo Cake")
            .or_else(|| book.first_option_of_type("photos"))
            .unwrap_or(DEFAULT_PHOTO_PRICE);
        let multiplier = Decimal::from(selection.photo_count.div_ceil(2));
        push_line(
            &mut lines,
            format!("Photo cake ({} photos)", selection.photo_count),
            unit * multiplier,
        );
    }

    // Flowers
    if selection.flowers > 0 {
        let unit = book
            .option_price("flower", "General Flower")
            .or_else(|| book.first_option_of_type("flower"))
            .unwrap_or(DEFAULT_FLOWER_PRICE);
        push_line(
            &mut lines,
            format!("Flowers ({} units)", selection.flowers),
            unit * Decimal::from(selection.flowers),
        );
    }

    // Toys, with the Edible Toys promotion
    let promo_active =
        selection.icing.as_deref() == Some(FONDANT) && weight >= PROMO_MIN_WEIGHT_KG;
    for toy in &selection.toys {
        if toy.count == 0 {
            continue;
        }
        let unit = book
            .option_price("toy", &toy.name)
            .unwrap_or(Decimal::ZERO);
        // First 5 units free, but only once there are at least 5 to give away
        let (payable, label) = if toy.name == EDIBLE_TOYS
            && promo_active
            && toy.count >= FREE_EDIBLE_TOYS
        {
            (
                toy.count - FREE_EDIBLE_TOYS,
                format!(
                    "{} ({} units, {} free)",
                    toy.name, toy.count, FREE_EDIBLE_TOYS
                ),
            )
        } else {
            (toy.count, format!("{} ({} units)", toy.name, toy.count))
        };
        push_line(&mut lines, label, unit * Decimal::from(payable));
    }

    let total = lines.iter().map(|line| line.amount).sum();
    Quote {
        breakdown: lines,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_book() -> PriceBook {
        let mut book = PriceBook::new();
        book.add_option("flavor", "Vanilla", dec!(500));
        book.add_option("flavor", "Chocolate", dec!(550));
        book.add_option("shape", "Round", dec!(0));
        book.add_option("shape", "Heart", dec!(100));
        book.add_option("shape", "Custom Shape", dec!(200));
        book.add_option("cake_type", "Pastry", dec!(0));
        book.add_option("cake_type", "Doll Cake", dec!(300));
        book.add_option("toy", "Edible Toys", dec!(40));
        book.add_option("toy", "Non-Edible Toys", dec!(60));
        book.add_option("flower", "General Flower", dec!(50));
        book.add_rule("Eggless", dec!(100));
        book.add_rule("Photo Cake", dec!(250));
        book.add_rule("Fondant_per_kg", dec!(700));
        book.add_rule("Semi-Fondant_per_kg", dec!(500));
        book
    }

    fn banded_book() -> PriceBook {
        let mut book = seeded_book();
        book.rules.remove("Fondant_per_kg");
        book.rules.remove("Semi-Fondant_per_kg");
        book.add_rule("Fondant_1_1.5kg", dec!(800));
        book.add_rule("Fondant_2_4kg", dec!(1500));
        book.add_rule("Fondant_5kg_and_above", dec!(3000));
        book
    }

    fn base_selection() -> CakeSelection {
        CakeSelection {
            weight_kg: dec!(1),
            icing: Some("Whipped Cream".to_string()),
            flavour: Some("Vanilla".to_string()),
            cake_type: Some("Pastry".to_string()),
            shape: Some("Round".to_string()),
            with_egg: true,
            photo_count: 0,
            flowers: 0,
            toys: vec![],
        }
    }

    fn assert_breakdown_sums(quote: &Quote) {
        let sum: Decimal = quote.breakdown.iter().map(|line| line.amount).sum();
        assert_eq!(sum, quote.total);
    }

    #[test]
    fn test_breakdown_sum_invariant() {
        let book = seeded_book();
        let selection = CakeSelection {
            weight_kg: dec!(4.5),
            icing: Some("Fondant".to_string()),
            flavour: Some("Chocolate".to_string()),
            cake_type: Some("Doll Cake".to_string()),
            shape: Some("Custom Shape".to_string()),
            with_egg: false,
            photo_count: 3,
            flowers: 7,
            toys: vec![
                ToySelection {
                    name: "Edible Toys".to_string(),
                    count: 8,
                },
                ToySelection {
                    name: "Non-Edible Toys".to_string(),
                    count: 2,
                },
            ],
        };

        let quote = price_cake(&selection, &book);
        assert_breakdown_sums(&quote);
        assert!(quote.breakdown.len() >= 7);
    }

    #[test]
    fn test_base_price_is_flavour_times_weight() {
        let book = seeded_book();
        let mut selection = base_selection();
        selection.weight_kg = dec!(2);

        let quote = price_cake(&selection, &book);
        assert_eq!(quote.total, dec!(1000));
        assert_eq!(quote.breakdown.len(), 1);
        assert_eq!(quote.breakdown[0].label, "Vanilla flavour (2kg)");
    }

    #[test]
    fn test_zero_weight_zero_quantities_price_zero() {
        let book = seeded_book();
        let mut selection = base_selection();
        selection.weight_kg = Decimal::ZERO;
        selection.with_egg = false; // eggless is per-kg, so still zero

        let quote = price_cake(&selection, &book);
        assert_eq!(quote.total, Decimal::ZERO);
        assert!(quote.breakdown.is_empty());
    }

    #[test]
    fn test_unknown_flavour_falls_back_then_zero() {
        let mut book = seeded_book();
        book.options.remove(&("flavor".to_string(), "Chocolate".to_string()));

        // Not in the table, but in the fallback map
        let mut selection = base_selection();
        selection.flavour = Some("Chocolate".to_string());
        let quote = price_cake(&selection, &book);
        assert_eq!(quote.total, dec!(550));

        // Nowhere at all: contributes nothing
        selection.flavour = Some("Mango Mousse".to_string());
        let quote = price_cake(&selection, &book);
        assert_eq!(quote.total, Decimal::ZERO);
    }

    #[test]
    fn test_fondant_per_kg_mode() {
        let book = seeded_book();
        let mut selection = base_selection();
        selection.weight_kg = dec!(2);
        selection.icing = Some("Fondant".to_string());

        let quote = price_cake(&selection, &book);
        // 500*2 base + 700*2 fondant
        assert_eq!(quote.total, dec!(2400));
        assert!(quote
            .breakdown
            .iter()
            .any(|line| line.label == "Fondant icing (2kg)" && line.amount == dec!(1400)));
    }

    #[test]
    fn test_fondant_per_kg_default_when_rules_missing() {
        let mut book = seeded_book();
        book.rules.remove("Fondant_per_kg");
        let mut selection = base_selection();
        selection.weight_kg = dec!(1);
        selection.icing = Some("Fondant".to_string());

        let quote = price_cake(&selection, &book);
        assert_eq!(quote.total, dec!(500) + dec!(700));
    }

    #[test]
    fn test_banded_mode_tiers() {
        let book = banded_book();
        let mut selection = base_selection();
        selection.icing = Some("Fondant".to_string());

        selection.weight_kg = dec!(1.5);
        let quote = price_cake(&selection, &book);
        assert!(quote
            .breakdown
            .iter()
            .any(|line| line.label == "Fondant icing (1-1.5kg)" && line.amount == dec!(800)));

        selection.weight_kg = dec!(3);
        let quote = price_cake(&selection, &book);
        assert!(quote
            .breakdown
            .iter()
            .any(|line| line.label == "Fondant icing (2-4kg)" && line.amount == dec!(1500)));

        selection.weight_kg = dec!(5);
        let quote = price_cake(&selection, &book);
        assert!(quote
            .breakdown
            .iter()
            .any(|line| line.label == "Fondant icing (5kg+)" && line.amount == dec!(3000)));
    }

    #[test]
    fn test_banded_mode_between_bands_is_zero() {
        let book = banded_book();
        let mut selection = base_selection();
        selection.icing = Some("Fondant".to_string());
        selection.weight_kg = dec!(1.75);

        let quote = price_cake(&selection, &book);
        // Base only: no tier rule covers 1.5-2kg
        assert_eq!(quote.total, dec!(500) * dec!(1.75));
        assert_breakdown_sums(&quote);
    }

    #[test]
    fn test_eggless_surcharge_default() {
        let mut book = seeded_book();
        book.rules.remove("Eggless");
        let mut selection = base_selection();
        selection.weight_kg = dec!(2);
        selection.with_egg = false;

        let quote = price_cake(&selection, &book);
        // 500*2 base + default 100*2 eggless
        assert_eq!(quote.total, dec!(1200));
    }

    #[test]
    fn test_custom_shape_prices_per_kg() {
        let book = seeded_book();
        let mut selection = base_selection();
        selection.weight_kg = dec!(3);
        selection.shape = Some("Custom Shape".to_string());

        let quote = price_cake(&selection, &book);
        // 500*3 base + 200*3 custom shape
        assert_eq!(quote.total, dec!(2100));

        // Zero-priced custom shape falls back to the default per-kg rate
        let mut zero_book = seeded_book();
        zero_book.add_option("shape", "Custom Shape", Decimal::ZERO);
        let quote = price_cake(&selection, &zero_book);
        assert_eq!(quote.total, dec!(2100));
    }

    #[test]
    fn test_photo_surcharge_rounds_up_pairs() {
        let book = seeded_book();
        let mut selection = base_selection();
        selection.weight_kg = Decimal::ZERO;

        for (photos, expected) in [(1, dec!(250)), (2, dec!(250)), (3, dec!(500)), (4, dec!(500))]
        {
            selection.photo_count = photos;
            let quote = price_cake(&selection, &book);
            assert_eq!(quote.total, expected, "photo_count = {photos}");
        }
    }

    #[test]
    fn test_flower_pricing_with_default() {
        let mut book = seeded_book();
        let mut selection = base_selection();
        selection.weight_kg = Decimal::ZERO;
        selection.flowers = 4;

        let quote = price_cake(&selection, &book);
        assert_eq!(quote.total, dec!(200));

        // No flower option anywhere: unit defaults to 50
        book.options.remove(&("flower".to_string(), "General Flower".to_string()));
        let quote = price_cake(&selection, &book);
        assert_eq!(quote.total, dec!(200));
    }

    #[test]
    fn test_toy_promotion_boundary() {
        let book = seeded_book();
        let mut selection = base_selection();
        selection.icing = Some("Fondant".to_string());
        selection.weight_kg = dec!(4);
        selection.flavour = None;

        let toy_total = |count: u32| {
            let mut s = selection.clone();
            s.toys = vec![ToySelection {
                name: "Edible Toys".to_string(),
                count,
            }];
            let quote = price_cake(&s, &book);
            // Strip the fondant per-kg line to isolate the toy charge
            quote
                .breakdown
                .iter()
                .filter(|line| line.label.starts_with("Edible Toys"))
                .map(|line| line.amount)
                .sum::<Decimal>()
        };

        assert_eq!(toy_total(5), Decimal::ZERO);
        assert_eq!(toy_total(6), dec!(40));
        assert_eq!(toy_total(4), dec!(160)); // promotion never applies below 5
    }

    #[test]
    fn test_toy_promotion_requires_fondant_and_weight() {
        let book = seeded_book();
        let mut selection = base_selection();
        selection.flavour = None;
        selection.toys = vec![ToySelection {
            name: "Edible Toys".to_string(),
            count: 5,
        }];

        // Fondant below the threshold: full price
        selection.icing = Some("Fondant".to_string());
        selection.weight_kg = dec!(3.5);
        assert_eq!(price_cake(&selection, &book).total, dec!(200));

        // Heavy cake but not fondant: full price
        selection.icing = Some("Whipped Cream".to_string());
        selection.weight_kg = dec!(5);
        assert_eq!(price_cake(&selection, &book).total, dec!(200));
    }

    #[test]
    fn test_unknown_toy_contributes_zero() {
        let book = seeded_book();
        let mut selection = base_selection();
        selection.weight_kg = Decimal::ZERO;
        selection.toys = vec![ToySelection {
            name: "Dinosaur Topper".to_string(),
            count: 3,
        }];

        let quote = price_cake(&selection, &book);
        assert_eq!(quote.total, Decimal::ZERO);
        assert!(quote.breakdown.is_empty());
    }

    #[test]
    fn test_fractional_weight_rounds_lines_to_two_places() {
        let mut book = seeded_book();
        book.add_option("flavor", "Opera", dec!(333.33));
        let mut selection = base_selection();
        selection.flavour = Some("Opera".to_string());
        selection.weight_kg = dec!(1.5);

        let quote = price_cake(&selection, &book);
        assert_eq!(quote.breakdown[0].amount, dec!(500.00));
        assert_breakdown_sums(&quote);
    }
}
