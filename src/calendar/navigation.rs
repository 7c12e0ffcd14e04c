use chrono::{Duration, Months, NaiveDate};

use crate::models::{NavBtn, ViewType};

/// Nueva fecha ancla tras pulsar un botón de navegación.
/// Back/Next avanzan un día, una semana o un mes según la vista.
pub fn navigate(view: ViewType, anchor: NaiveDate, btn: NavBtn, today: NaiveDate) -> NaiveDate {
    match btn {
        NavBtn::Today => today,
        NavBtn::Back => step(view, anchor, -1),
        NavBtn::Next => step(view, anchor, 1),
    }
}

fn step(view: ViewType, anchor: NaiveDate, delta: i32) -> NaiveDate {
    let moved = match view {
        ViewType::Day => anchor.checked_add_signed(Duration::days(delta as i64)),
        ViewType::Week => anchor.checked_add_signed(Duration::weeks(delta as i64)),
        ViewType::Month => shift_month(anchor, delta),
    };
    // Fuera del rango de chrono: nos quedamos donde estamos
    moved.unwrap_or(anchor)
}

/// Mantiene el día del mes, recortado al último día del mes destino
fn shift_month(anchor: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta < 0 {
        anchor.checked_sub_months(months)
    } else {
        anchor.checked_add_months(months)
    }
}
