// ============================================================================
// CALENDAR - Lógica pura del calendario (sin DOM)
// ============================================================================

pub mod events;
pub mod navigation;
pub mod range;

pub use events::events_on;
pub use navigation::navigate;
pub use range::{title, visible_days};

use chrono::{Datelike, Duration, NaiveDate};

/// Primer día de la semana en las vistas Week/Month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Valor desconocido -> lunes
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sunday" | "sun" => WeekStart::Sunday,
            _ => WeekStart::Monday,
        }
    }

    /// Inicio de la semana que contiene `day`
    pub fn week_of(&self, day: NaiveDate) -> NaiveDate {
        let offset = match self {
            WeekStart::Monday => day.weekday().num_days_from_monday(),
            WeekStart::Sunday => day.weekday().num_days_from_sunday(),
        };
        day.checked_sub_signed(Duration::days(offset as i64))
            .unwrap_or(day)
    }
}
