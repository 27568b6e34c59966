//! Transient notification stack. Mounted once at the app root; any component
//! grabs a [`Toasts`] handle through `use_toasts()` and pushes success or
//! error messages that dismiss themselves after a few seconds.

use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
struct ToastEntry {
    id: usize,
    kind: ToastKind,
    message: String,
}

#[derive(Debug, Default, PartialEq)]
struct ToastList {
    entries: Vec<ToastEntry>,
}

enum ToastAction {
    Push(ToastEntry),
    Dismiss(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        match action {
            ToastAction::Push(entry) => {
                let mut entries = self.entries.clone();
                entries.push(entry);
                Rc::new(ToastList { entries })
            }
            ToastAction::Dismiss(id) => Rc::new(ToastList {
                entries: self
                    .entries
                    .iter()
                    .filter(|entry| entry.id != id)
                    .cloned()
                    .collect(),
            }),
        }
    }
}

/// Cloneable handle for pushing notifications from anywhere in the tree.
#[derive(Clone, PartialEq)]
pub struct Toasts {
    push: Callback<(ToastKind, String)>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Error, message.into()));
    }
}

#[hook]
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("use_toasts called outside of ToastProvider")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let counter = use_mut_ref(|| 0usize);

    let push = {
        let list = list.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            let id = {
                let mut counter = counter.borrow_mut();
                *counter += 1;
                *counter
            };
            list.dispatch(ToastAction::Push(ToastEntry { id, kind, message }));
            let list = list.clone();
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                list.dispatch(ToastAction::Dismiss(id));
            });
        })
    };

    let handle = Toasts { push };

    html! {
        <ContextProvider<Toasts> context={handle}>
            { for props.children.iter() }
            <div class="toast-stack">
                { for list.entries.iter().map(|entry| {
                    let class = match entry.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    html! { <div key={entry.id} {class}>{ &entry.message }</div> }
                }) }
            </div>
        </ContextProvider<Toasts>>
    }
}
