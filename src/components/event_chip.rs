use yew::prelude::*;

use crate::models::CalendarEvent;

#[derive(Properties, PartialEq)]
pub struct EventChipProps {
    pub event: CalendarEvent,
    #[prop_or_default]
    pub on_click: Option<Callback<CalendarEvent>>,
}

/// Un evento dentro de una celda. Las notas van en el tooltip.
#[function_component(EventChip)]
pub fn event_chip(props: &EventChipProps) -> Html {
    let onclick = props.on_click.clone().map(|callback| {
        let event = props.event.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            callback.emit(event.clone());
        })
    });

    html! {
        <div
            class="event-chip"
            style={format!("background-color: {};", props.event.color)}
            title={props.event.notes().to_string()}
            {onclick}
        >
            { props.event.title.clone() }
        </div>
    }
}
