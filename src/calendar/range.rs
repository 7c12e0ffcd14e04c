use chrono::{Datelike, Duration, Months, NaiveDate};

use super::WeekStart;
use crate::models::ViewType;

/// Días que se pintan en la vista actual, en orden.
/// Month siempre cubre semanas completas (28, 35 o 42 días).
pub fn visible_days(view: ViewType, anchor: NaiveDate, week_start: WeekStart) -> Vec<NaiveDate> {
    match view {
        ViewType::Day => vec![anchor],
        ViewType::Week => week_start.week_of(anchor).iter_days().take(7).collect(),
        ViewType::Month => {
            let (start, end) = month_grid_bounds(anchor, week_start);
            let count = (end - start).num_days() + 1;
            start.iter_days().take(count as usize).collect()
        }
    }
}

fn month_grid_bounds(anchor: NaiveDate, week_start: WeekStart) -> (NaiveDate, NaiveDate) {
    let first = anchor.with_day(1).unwrap_or(anchor);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(anchor);
    let start = week_start.week_of(first);
    let end = week_start
        .week_of(last)
        .checked_add_signed(Duration::days(6))
        .unwrap_or(last);
    (start, end)
}

/// ¿Pertenece `day` al mes del ancla? (para atenuar celdas en Month)
pub fn in_anchor_month(day: NaiveDate, anchor: NaiveDate) -> bool {
    day.year() == anchor.year() && day.month() == anchor.month()
}

/// Título del toolbar para la vista actual
pub fn title(view: ViewType, anchor: NaiveDate, week_start: WeekStart) -> String {
    match view {
        ViewType::Month => anchor.format("%B %Y").to_string(),
        ViewType::Day => anchor.format("%A, %B %-d, %Y").to_string(),
        ViewType::Week => {
            let start = week_start.week_of(anchor);
            let end = start.checked_add_signed(Duration::days(6)).unwrap_or(start);
            if start.year() == end.year() {
                format!("{} – {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
            } else {
                format!("{} – {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
            }
        }
    }
}
