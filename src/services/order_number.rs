//! Daily order-number allocation
//!
//! Order numbers are `YYYYMMDD` plus a zero-padded 3-digit sequence that
//! restarts every UTC day, backed by one `daily_order_counter` row per date.
//! The increment is a conditional update (counter must still equal the value
//! just read), retried on conflict, so two orders landing in the same second
//! can never share a number. A plain read-then-write would race here.
//!
//! Numbers burned by a failed order insert are gaps, never reused.

use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::{daily_order_counter, prelude::*};

/// CAS attempts before giving up; each retry re-reads the current counter
const MAX_ALLOCATION_ATTEMPTS: u32 = 5;

/// A reserved order number for one specific date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatedOrderNumber {
    pub order_date: NaiveDate,
    /// Pre-increment counter value: the first order of a day is sequence 1
    pub sequence: i32,
    pub order_number: String,
}

/// Format a date + sequence pair as the customer-visible order number,
/// e.g. 2025-01-09 with sequence 3 becomes "20250109003".
pub fn format_order_number(date: NaiveDate, sequence: i32) -> String {
    format!("{}{:03}", date.format("%Y%m%d"), sequence)
}

/// Reserve the next order number for `date`.
///
/// Lazily creates the day's counter row (insert-if-absent, never an
/// overwrite), then advances it with a bounded compare-and-set loop. Any
/// failure leaves no partial state, so callers can safely retry the whole
/// placement.
pub async fn allocate_order_number(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<AllocatedOrderNumber, Box<dyn std::error::Error + Send + Sync>> {
    // Ensure the row exists; ON CONFLICT DO NOTHING keeps a concurrent first
    // order of the day from resetting the counter back to 1.
    DailyOrderCounter::insert(daily_order_counter::ActiveModel {
        order_date: Set(date),
        counter: Set(1),
    })
    .on_conflict(
        OnConflict::column(daily_order_counter::Column::OrderDate)
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(db)
    .await?;

    for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
        let row = DailyOrderCounter::find_by_id(date)
            .one(db)
            .await?
            .ok_or_else(|| format!("daily counter row for {date} missing after upsert"))?;

        let current = row.counter;

        // Advance only if nobody else advanced it since the read
        let update = DailyOrderCounter::update_many()
            .col_expr(daily_order_counter::Column::Counter, Expr::value(current + 1))
            .filter(daily_order_counter::Column::OrderDate.eq(date))
            .filter(daily_order_counter::Column::Counter.eq(current))
            .exec(db)
            .await?;

        if update.rows_affected == 1 {
            return Ok(AllocatedOrderNumber {
                order_date: date,
                sequence: current,
                order_number: format_order_number(date, current),
            });
        }

        tracing::debug!(
            "Order number CAS conflict for {} (attempt {}/{})",
            date,
            attempt,
            MAX_ALLOCATION_ATTEMPTS
        );
    }

    Err(format!(
        "order number allocation for {date} still contended after {MAX_ALLOCATION_ATTEMPTS} attempts"
    )
    .into())
}
