use yew::prelude::*;

use crate::models::{NavBtn, ViewType};

#[derive(Properties, PartialEq)]
pub struct CalendarToolbarProps {
    pub view: ViewType,
    pub title: AttrValue,
    pub on_nav: Callback<NavBtn>,
    pub on_view: Callback<ViewType>,
}

#[function_component(CalendarToolbar)]
pub fn calendar_toolbar(props: &CalendarToolbarProps) -> Html {
    let nav_buttons = NavBtn::ALL.iter().map(|&btn| {
        let onclick = props.on_nav.reform(move |_: MouseEvent| btn);
        html! {
            <button class={classes!("btn-nav", format!("btn-{}", btn.as_str()))} {onclick}>
                { btn.label() }
            </button>
        }
    });

    let view_buttons = ViewType::ALL.iter().map(|&view| {
        let onclick = props.on_view.reform(move |_: MouseEvent| view);
        let active = (view == props.view).then_some("active");
        html! {
            <button class={classes!("btn-view", active)} {onclick}>
                { view.label() }
            </button>
        }
    });

    html! {
        <div class="calendar-toolbar">
            <div class="toolbar-nav">{ for nav_buttons }</div>
            <h2 class="toolbar-title">{ props.title.clone() }</h2>
            <div class="toolbar-views">{ for view_buttons }</div>
        </div>
    }
}
