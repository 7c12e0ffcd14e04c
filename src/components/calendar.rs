// ============================================================================
// CALENDAR COMPONENT
// ============================================================================
// Toolbar (today/back/next + month/week/day) y rejilla de días con eventos.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::calendar::range::in_anchor_month;
use crate::calendar::{events_on, title, visible_days};
use crate::components::{CalendarToolbar, EventChip};
use crate::config::CONFIG;
use crate::hooks::use_calendar;
use crate::models::{CalendarEvent, ViewType};
use crate::utils::today;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub events: Rc<Vec<CalendarEvent>>,
    #[prop_or_default]
    pub initial_view: Option<ViewType>,
    #[prop_or_default]
    pub on_event_click: Option<Callback<CalendarEvent>>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let today = today();
    let week_start = CONFIG.week_start();
    let initial_view = props.initial_view.unwrap_or_else(|| CONFIG.initial_view());
    let handle = use_calendar(initial_view, today);
    let state = *handle.state;

    let days = visible_days(state.view, state.anchor, week_start);
    let heading = title(state.view, state.anchor, week_start);

    // Cabecera de días de la semana (Day usa una sola columna)
    let weekday_header = days.iter().take(7).map(|day| {
        html! { <div class="weekday">{ day.format("%a").to_string() }</div> }
    });

    let cells = days.iter().map(|&day| {
        let outside = state.view == ViewType::Month && !in_anchor_month(day, state.anchor);
        let class = classes!(
            "day-cell",
            outside.then_some("outside"),
            (day == today).then_some("today")
        );
        let chips = events_on(&props.events, day).into_iter().map(|event| {
            html! {
                <EventChip event={event.clone()} on_click={props.on_event_click.clone()} />
            }
        });

        html! {
            <div {class} key={day.to_string()}>
                <span class="day-number">{ day.format("%-d").to_string() }</span>
                <div class="day-events">{ for chips }</div>
            </div>
        }
    });

    html! {
        <div class={classes!("calendar", format!("calendar-{}", state.view.as_str()))}>
            <CalendarToolbar
                view={state.view}
                title={AttrValue::from(heading)}
                on_nav={handle.navigate.clone()}
                on_view={handle.set_view.clone()}
            />
            <div class="calendar-header">{ for weekday_header }</div>
            <div class="calendar-grid">{ for cells }</div>
        </div>
    }
}
