use chrono::NaiveDate;

use crate::models::CalendarEvent;

/// Eventos de un día, en el orden de entrada.
/// Los eventos con fecha ilegible no aparecen en ningún día.
pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|event| match event.day() {
            Some(event_day) => event_day == day,
            None => {
                log::debug!("[CALENDAR] Fecha ilegible en evento '{}': {}", event.title, event.date);
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_by_day_keeping_order() {
        let events = vec![
            CalendarEvent::new("Meeting", "2024-01-01", "#ff0000", "Quarterly review"),
            CalendarEvent::new("Lunch", "2024-01-02", "green", ""),
            CalendarEvent::new("Retro", "2024-01-01T16:00:00", "blue", "sprint 3"),
            CalendarEvent::new("Broken", "soon", "gray", ""),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let titles: Vec<&str> = events_on(&events, day).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Meeting", "Retro"]);
    }

    #[test]
    fn test_empty_day() {
        let events = vec![CalendarEvent::new("Meeting", "2024-01-01", "red", "")];
        let day = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(events_on(&events, day).is_empty());
    }
}
