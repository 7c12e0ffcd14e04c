// ============================================================================
// CALENDAR - Contrato de datos del calendario
// ============================================================================
// Formas que intercambian la vista y el componente Calendar.
// La única validación es estructural (tipos + serde).
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Modo de visualización del calendario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Month,
    Week,
    Day,
}

impl ViewType {
    pub const ALL: [ViewType; 3] = [ViewType::Month, ViewType::Week, ViewType::Day];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Month => "month",
            ViewType::Week => "week",
            ViewType::Day => "day",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewType::Month => "Month",
            ViewType::Week => "Week",
            ViewType::Day => "Day",
        }
    }

    /// Solo acepta los literales exactos (`month`, `week`, `day`)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "month" => Some(ViewType::Month),
            "week" => Some(ViewType::Week),
            "day" => Some(ViewType::Day),
            _ => None,
        }
    }
}

/// Acción de navegación del toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavBtn {
    Today,
    Back,
    Next,
}

impl NavBtn {
    pub const ALL: [NavBtn; 3] = [NavBtn::Today, NavBtn::Back, NavBtn::Next];

    pub fn as_str(&self) -> &'static str {
        match self {
            NavBtn::Today => "today",
            NavBtn::Back => "back",
            NavBtn::Next => "next",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavBtn::Today => "Today",
            NavBtn::Back => "‹",
            NavBtn::Next => "›",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedProps {
    pub notes: String,
}

/// Evento tal como lo consume el calendario.
/// `date` es texto ISO (`YYYY-MM-DD`) y `color` un token CSS; no se validan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    pub date: String,
    pub color: String,
    pub extended_props: ExtendedProps,
}

impl CalendarEvent {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        color: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            color: color.into(),
            extended_props: ExtendedProps { notes: notes.into() },
        }
    }

    /// Día del evento. Acepta también un datetime ISO (usa solo la parte de fecha).
    pub fn day(&self) -> Option<NaiveDate> {
        let raw = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    pub fn notes(&self) -> &str {
        &self.extended_props.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_meeting_event() {
        let json = r##"{
            "title": "Meeting",
            "date": "2024-01-01",
            "color": "#ff0000",
            "extendedProps": { "notes": "Quarterly review" }
        }"##;
        let event: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            CalendarEvent::new("Meeting", "2024-01-01", "#ff0000", "Quarterly review")
        );
        assert_eq!(event.day(), NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn test_rejects_event_without_notes() {
        let missing_notes = r##"{"title":"Meeting","date":"2024-01-01","color":"#ff0000","extendedProps":{}}"##;
        assert!(serde_json::from_str::<CalendarEvent>(missing_notes).is_err());

        let missing_props = r##"{"title":"Meeting","date":"2024-01-01","color":"#ff0000"}"##;
        assert!(serde_json::from_str::<CalendarEvent>(missing_props).is_err());
    }

    #[test]
    fn test_serializes_extended_props_in_camel_case() {
        let event = CalendarEvent::new("Standup", "2024-03-04", "blue", "daily");
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["extendedProps"]["notes"], "daily");
        assert!(value.get("extended_props").is_none());
    }

    #[test]
    fn test_view_type_literals() {
        for view in ViewType::ALL {
            let json = format!("\"{}\"", view.as_str());
            assert_eq!(serde_json::from_str::<ViewType>(&json).unwrap(), view);
            assert_eq!(ViewType::parse(view.as_str()), Some(view));
        }
        assert!(serde_json::from_str::<ViewType>("\"year\"").is_err());
        assert!(serde_json::from_str::<ViewType>("\"Month\"").is_err());
        assert_eq!(ViewType::parse("agenda"), None);
        assert_eq!(ViewType::default(), ViewType::Month);
    }

    #[test]
    fn test_nav_btn_literals() {
        let parsed: Vec<NavBtn> = serde_json::from_str(r#"["today","back","next"]"#).unwrap();
        assert_eq!(parsed, NavBtn::ALL.to_vec());
        assert!(serde_json::from_str::<NavBtn>("\"previous\"").is_err());
    }

    #[test]
    fn test_day_from_datetime_and_garbage() {
        let event = CalendarEvent::new("Call", "2024-02-29T09:30:00Z", "green", "");
        assert_eq!(event.day(), NaiveDate::from_ymd_opt(2024, 2, 29));

        let bad = CalendarEvent::new("Call", "next tuesday", "green", "");
        assert_eq!(bad.day(), None);
    }
}
