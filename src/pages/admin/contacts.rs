use yew::prelude::*;

use crate::api::client;
use crate::api::models::ContactMessage;
use crate::hooks::{use_collection, use_delete, Fetch};

/// Inbound contact messages. Read and delete only; there is nothing to edit.
#[function_component(ContactList)]
pub fn contact_list() -> Html {
    let messages = use_collection::<ContactMessage>(client::CONTACTS, "contact messages");
    let on_delete = use_delete(client::CONTACTS, messages.clone(), "contact message");

    html! {
        <div>
            <h1 class="text-2xl font-bold mb-4">{ "Contact Messages" }</h1>
            {
                match &*messages {
                    Fetch::Loading => html! { <p>{ "Loading messages..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {
                        <p>{ "No contact messages yet." }</p>
                    },
                    Fetch::Ready(list) => html! {
                        <div class="flex flex-col gap-3">
                            { for list.iter().map(|message| {
                                let delete = on_delete.clone();
                                let id = message.id;
                                html! {
                                    <article key={message.id} class="contact-card border rounded p-3">
                                        <div class="flex items-center justify-between mb-1">
                                            <h2 class="font-bold">{ &message.fullname }</h2>
                                            <button
                                                class="btn btn-danger text-sm"
                                                onclick={Callback::from(move |_| delete.emit(id))}
                                            >
                                                { "Delete" }
                                            </button>
                                        </div>
                                        <p class="text-sm mb-1">
                                            <a href={format!("mailto:{}", message.email)}>
                                                { &message.email }
                                            </a>
                                        </p>
                                        { for detail_lines(message).into_iter().map(|line| html! {
                                            <p class="text-sm mb-1">{ line }</p>
                                        }) }
                                        <p class="mt-2">{ &message.message }</p>
                                    </article>
                                }
                            }) }
                        </div>
                    },
                    Fetch::Failed(message) => html! {
                        <p class="error-message">{ format!("Could not load messages: {message}") }</p>
                    },
                }
            }
        </div>
    }
}

/// Optional metadata rendered only when the sender filled it in.
fn detail_lines(message: &ContactMessage) -> Vec<String> {
    let mut lines = Vec::new();
    let mut push = |label: &str, value: &Option<String>| {
        if let Some(value) = value {
            let value = value.trim();
            if !value.is_empty() && value != "Not provided" {
                lines.push(format!("{label}: {value}"));
            }
        }
    };
    push("Company", &message.company);
    push("Domain", &message.domain);
    push("Technologies", &message.technologies);
    push("Address", &message.address);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_placeholder_details_are_hidden() {
        let message = ContactMessage {
            id: 1,
            fullname: "Jo".to_owned(),
            email: "jo@example.com".to_owned(),
            company: Some("Acme".to_owned()),
            domain: Some("  ".to_owned()),
            technologies: None,
            address: Some("Not provided".to_owned()),
            message: "Hi".to_owned(),
        };
        assert_eq!(detail_lines(&message), vec!["Company: Acme"]);
    }
}
