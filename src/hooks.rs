//! Shared data-fetching hooks. Every CRUD screen is the same shape — fetch a
//! collection on mount, render it, delete rows after a confirmation — so the
//! shape lives here once and the screens stay thin.

use gloo::console::error;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::models::Keyed;
use crate::api::Resource;
use crate::components::toast::use_toasts;

/// Lifecycle of a fetch-on-mount request.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Fetches the full collection when the component mounts. Failures are logged,
/// toasted, and left in the state so the screen can show an inline message.
#[hook]
pub fn use_collection<T>(resource: Resource, noun: &'static str) -> UseStateHandle<Fetch<Vec<T>>>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let state = use_state(|| Fetch::Loading);
    let toasts = use_toasts();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match resource.list::<T>().await {
                    Ok(rows) => state.set(Fetch::Ready(rows)),
                    Err(e) => {
                        error!(format!("Failed to fetch {noun}: {e}"));
                        toasts.error(format!("Failed to load {noun}: {e}"));
                        state.set(Fetch::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    state
}

/// Fetches a single record by id, for edit screens that prefill their form.
#[hook]
pub fn use_record<T>(resource: Resource, id: u32, noun: &'static str) -> UseStateHandle<Fetch<T>>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let state = use_state(|| Fetch::Loading);
    let toasts = use_toasts();

    {
        let state = state.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            spawn_local(async move {
                match resource.get::<T>(id).await {
                    Ok(record) => state.set(Fetch::Ready(record)),
                    Err(e) => {
                        error!(format!("Failed to fetch {noun} {id}: {e}"));
                        toasts.error(format!("Failed to load {noun}: {e}"));
                        state.set(Fetch::Failed(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    state
}

/// Returns a delete callback for a list screen: browser confirmation first,
/// then DELETE by id; on success the row is dropped from local state without
/// a re-fetch, on failure the list is left untouched.
#[hook]
pub fn use_delete<T>(
    resource: Resource,
    rows: UseStateHandle<Fetch<Vec<T>>>,
    noun: &'static str,
) -> Callback<u32>
where
    T: Keyed + Clone + PartialEq + 'static,
{
    let toasts = use_toasts();

    Callback::from(move |id: u32| {
        if !confirm(&format!("Delete this {noun}? This cannot be undone.")) {
            return;
        }
        let rows = rows.clone();
        let toasts = toasts.clone();
        spawn_local(async move {
            match resource.delete(id).await {
                Ok(()) => {
                    if let Fetch::Ready(list) = &*rows {
                        let remaining = list
                            .iter()
                            .filter(|row| row.key() != id)
                            .cloned()
                            .collect::<Vec<_>>();
                        rows.set(Fetch::Ready(remaining));
                    }
                    toasts.success(format!("Deleted {noun}"));
                }
                Err(e) => {
                    error!(format!("Failed to delete {noun} {id}: {e}"));
                    toasts.error(format!("Failed to delete {noun}: {e}"));
                }
            }
        });
    })
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
