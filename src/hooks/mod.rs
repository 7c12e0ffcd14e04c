pub mod use_calendar;

pub use use_calendar::{use_calendar, CalendarAction, CalendarState, UseCalendarHandle};
