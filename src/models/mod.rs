pub mod calendar;

pub use calendar::{CalendarEvent, ExtendedProps, NavBtn, ViewType};
