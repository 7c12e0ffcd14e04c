use std::rc::Rc;

use chrono::NaiveDate;
use yew::prelude::*;

use crate::calendar::navigate;
use crate::models::{NavBtn, ViewType};

/// Estado visible del calendario: modo + fecha ancla
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalendarState {
    pub view: ViewType,
    pub anchor: NaiveDate,
}

impl CalendarState {
    pub fn with_view(self, view: ViewType) -> Self {
        Self { view, ..self }
    }

    pub fn navigated(self, btn: NavBtn, today: NaiveDate) -> Self {
        Self {
            anchor: navigate(self.view, self.anchor, btn, today),
            ..self
        }
    }
}

/// Acciones del calendario; se aplican sobre el estado vigente, no sobre
/// el del último render
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalendarAction {
    SetView(ViewType),
    Navigate { btn: NavBtn, today: NaiveDate },
}

impl Reducible for CalendarState {
    type Action = CalendarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CalendarAction::SetView(view) => self.with_view(view),
            CalendarAction::Navigate { btn, today } => self.navigated(btn, today),
        };
        log::debug!("📅 [CALENDAR] {:?} -> {} {}", action, next.view.as_str(), next.anchor);
        Rc::new(next)
    }
}

pub struct UseCalendarHandle {
    pub state: UseReducerHandle<CalendarState>,
    pub set_view: Callback<ViewType>,
    pub navigate: Callback<NavBtn>,
}

#[hook]
pub fn use_calendar(initial_view: ViewType, today: NaiveDate) -> UseCalendarHandle {
    let state = use_reducer(|| CalendarState {
        view: initial_view,
        anchor: today,
    });

    let set_view = {
        let dispatcher = state.dispatcher();
        Callback::from(move |view: ViewType| dispatcher.dispatch(CalendarAction::SetView(view)))
    };

    let navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |btn: NavBtn| {
            dispatcher.dispatch(CalendarAction::Navigate { btn, today })
        })
    };

    UseCalendarHandle {
        state,
        set_view,
        navigate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_view_keeps_anchor() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let state = CalendarState { view: ViewType::Month, anchor };
        let weekly = state.with_view(ViewType::Week);
        assert_eq!(weekly.view, ViewType::Week);
        assert_eq!(weekly.anchor, anchor);
    }

    #[test]
    fn test_navigation_sequence() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let state = CalendarState { view: ViewType::Month, anchor: today }
            .navigated(NavBtn::Next, today)
            .navigated(NavBtn::Next, today);
        assert_eq!(state.anchor, NaiveDate::from_ymd_opt(2024, 8, 10).unwrap());

        let state = state.with_view(ViewType::Day).navigated(NavBtn::Back, today);
        assert_eq!(state.anchor, NaiveDate::from_ymd_opt(2024, 8, 9).unwrap());

        assert_eq!(state.navigated(NavBtn::Today, today).anchor, today);
    }

    #[test]
    fn test_consecutive_actions_chain_from_latest_state() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let state = Rc::new(CalendarState { view: ViewType::Week, anchor: today });

        let state = state
            .reduce(CalendarAction::Navigate { btn: NavBtn::Next, today })
            .reduce(CalendarAction::Navigate { btn: NavBtn::Next, today });
        assert_eq!(state.anchor, NaiveDate::from_ymd_opt(2024, 1, 24).unwrap());

        let state = state
            .reduce(CalendarAction::SetView(ViewType::Day))
            .reduce(CalendarAction::Navigate { btn: NavBtn::Back, today });
        assert_eq!(state.view, ViewType::Day);
        assert_eq!(state.anchor, NaiveDate::from_ymd_opt(2024, 1, 23).unwrap());
    }
}
