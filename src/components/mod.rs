pub mod calendar;
pub mod calendar_toolbar;
pub mod event_chip;

pub use calendar::Calendar;
pub use calendar_toolbar::CalendarToolbar;
pub use event_chip::EventChip;
