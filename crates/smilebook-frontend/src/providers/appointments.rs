//! The global appointments read-model: one fetched collection behind a
//! reducer, consumed only by the calendar view.

use std::rc::Rc;

use yew::prelude::*;

use smilebook::data::CalendarEntry;
use smilebook::log;

use crate::providers::api;

/// Where the single fetch currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Loading,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentsState {
    pub entries: Vec<CalendarEntry>,
    pub status: FetchStatus,
}

impl Default for AppointmentsState {
    fn default() -> Self {
        AppointmentsState {
            entries: Vec::new(),
            status: FetchStatus::Succeeded,
        }
    }
}

pub enum AppointmentsAction {
    FetchStarted,
    FetchSucceeded(Vec<CalendarEntry>),
    FetchFailed(String),
}

impl Reducible for AppointmentsState {
    type Action = AppointmentsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AppointmentsAction::FetchStarted => Rc::new(AppointmentsState {
                entries: self.entries.clone(),
                status: FetchStatus::Loading,
            }),
            AppointmentsAction::FetchSucceeded(entries) => Rc::new(AppointmentsState {
                entries,
                status: FetchStatus::Succeeded,
            }),
            AppointmentsAction::FetchFailed(message) => Rc::new(AppointmentsState {
                entries: self.entries.clone(),
                status: FetchStatus::Failed(message),
            }),
        }
    }
}

pub type AppointmentsContext = UseReducerHandle<AppointmentsState>;

/// Kick off the one fetch the store knows about.
pub fn fetch(store: &AppointmentsContext) {
    let store = store.clone();
    store.dispatch(AppointmentsAction::FetchStarted);
    wasm_bindgen_futures::spawn_local(async move {
        let client = api::create();
        match client.appointments().await {
            Ok(entries) => store.dispatch(AppointmentsAction::FetchSucceeded(entries)),
            Err(err) => {
                log::error!("failed to fetch appointment calendar: {err}");
                store.dispatch(AppointmentsAction::FetchFailed(err.to_string()));
            }
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct AppointmentsProviderProps {
    pub children: Children,
}

#[function_component(AppointmentsProvider)]
pub fn appointments_provider(props: &AppointmentsProviderProps) -> Html {
    let state = use_reducer(AppointmentsState::default);

    html! {
        <ContextProvider<AppointmentsContext> context={state}>
            {props.children.clone()}
        </ContextProvider<AppointmentsContext>>
    }
}

#[hook]
pub fn use_appointments() -> AppointmentsContext {
    use_context::<AppointmentsContext>()
        .expect("use_appointments must be used within an AppointmentsProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64) -> CalendarEntry {
        CalendarEntry {
            id,
            name: format!("Appointment {id}"),
            date: "2026-09-01".into(),
        }
    }

    #[test]
    fn starts_empty_and_settled() {
        let state = AppointmentsState::default();
        assert!(state.entries.is_empty());
        assert_eq!(state.status, FetchStatus::Succeeded);
    }

    #[test]
    fn fetch_started_keeps_entries_while_loading() {
        let state = Rc::new(AppointmentsState {
            entries: vec![entry(1)],
            status: FetchStatus::Succeeded,
        });
        let next = state.reduce(AppointmentsAction::FetchStarted);
        assert_eq!(next.status, FetchStatus::Loading);
        assert_eq!(next.entries.len(), 1);
    }

    #[test]
    fn fetch_succeeded_replaces_the_collection() {
        let state = Rc::new(AppointmentsState {
            entries: vec![entry(1)],
            status: FetchStatus::Loading,
        });
        let next = state.reduce(AppointmentsAction::FetchSucceeded(vec![entry(2), entry(3)]));
        assert_eq!(next.status, FetchStatus::Succeeded);
        assert_eq!(
            next.entries.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn fetch_failed_keeps_the_last_good_collection() {
        let state = Rc::new(AppointmentsState {
            entries: vec![entry(1)],
            status: FetchStatus::Loading,
        });
        let next = state.reduce(AppointmentsAction::FetchFailed("boom".into()));
        assert_eq!(next.status, FetchStatus::Failed("boom".into()));
        assert_eq!(next.entries.len(), 1);
    }
}
