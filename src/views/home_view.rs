use chrono::{Duration, NaiveDate};
use yew::prelude::*;

use crate::components::Calendar;
use crate::models::CalendarEvent;
use crate::utils::today;

/// Eventos de ejemplo alrededor de `today`; no hay persistencia
pub fn seed_events(today: NaiveDate) -> Vec<CalendarEvent> {
    let on = |offset: i64| (today + Duration::days(offset)).format("%Y-%m-%d").to_string();
    vec![
        CalendarEvent::new("Meeting", on(0), "#ff0000", "Quarterly review"),
        CalendarEvent::new("Dentist", on(2), "#3b82f6", "Bring insurance card"),
        CalendarEvent::new("Team lunch", on(2), "#10b981", "Pizza place downtown"),
        CalendarEvent::new("Release", on(9), "#f59e0b", "Tag and publish"),
        CalendarEvent::new("Retro", on(-5), "#8b5cf6", "Sprint retrospective"),
    ]
}

#[function_component(HomeView)]
pub fn home_view() -> Html {
    let events = use_memo((), |_| seed_events(today()));
    let selected = use_state(|| None::<CalendarEvent>);

    let on_event_click = {
        let selected = selected.clone();
        Callback::from(move |event: CalendarEvent| {
            log::info!("📌 [HOME] Evento seleccionado: {} ({})", event.title, event.date);
            selected.set(Some(event));
        })
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let details = (*selected).as_ref().map(|event| {
        html! {
            <aside class="event-details">
                <h3 style={format!("border-left: 4px solid {};", event.color)}>{ event.title.clone() }</h3>
                <p class="event-date">{ event.date.clone() }</p>
                <p class="event-notes">{ event.notes().to_string() }</p>
                <button class="btn-close" onclick={on_close}>{"✕"}</button>
            </aside>
        }
    });

    html! {
        <section class="home-view">
            <Calendar events={events.clone()} on_event_click={on_event_click} />
            { for details }
        </section>
    }
}
