use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::client;
use crate::api::models::ContactPayload;
use crate::components::navbar::Navbar;
use crate::components::toast::use_toasts;
use crate::forms;

const SERVICES: [(&str, &str); 4] = [
    (
        "Custom Software Development",
        "Web, mobile, and backend systems built to order.",
    ),
    (
        "Cloud & DevOps",
        "Migrations, infrastructure automation, and cost tuning.",
    ),
    (
        "Data & AI",
        "Pipelines, analytics, and applied machine learning.",
    ),
    (
        "Team Augmentation",
        "Senior engineers embedded in your existing teams.",
    ),
];

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <>
            <Navbar />
            <section class="services p-6">
                <h1 class="text-2xl font-bold mb-4">{ "What we do" }</h1>
                <div class="grid grid-cols-2 gap-4 mb-6">
                    { for SERVICES.iter().map(|(title, blurb)| html! {
                        <article key={*title} class="service-card border rounded p-3">
                            <h2 class="font-bold mb-1">{ *title }</h2>
                            <p class="text-sm">{ *blurb }</p>
                        </article>
                    }) }
                </div>
                <ContactForm />
            </section>
        </>
    }
}

/// Project inquiry form. Technologies are entered as tags (Enter or comma to
/// add); the backend receives them joined into one string.
#[function_component(ContactForm)]
fn contact_form() -> Html {
    let toasts = use_toasts();
    let fullname = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let domain = use_state(String::new);
    let message = use_state(String::new);
    let tech_input = use_state(String::new);
    let technologies = use_state(Vec::<String>::new);
    let error_message = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let bind_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| state.set(forms::input_value(&e)))
    };

    let on_fullname = bind_input(&fullname);
    let on_email = bind_input(&email);
    let on_company = bind_input(&company);
    let on_domain = bind_input(&domain);
    let on_tech_input = bind_input(&tech_input);

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| message.set(forms::textarea_value(&e)))
    };

    let on_tech_key = {
        let tech_input = tech_input.clone();
        let technologies = technologies.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == "," {
                e.prevent_default();
                let added = parse_tech_input(&tech_input, &technologies);
                if !added.is_empty() {
                    let mut next = (*technologies).clone();
                    next.extend(added);
                    technologies.set(next);
                }
                tech_input.set(String::new());
            }
        })
    };

    let remove_tech = {
        let technologies = technologies.clone();
        Callback::from(move |index: usize| {
            let mut next = (*technologies).clone();
            if index < next.len() {
                next.remove(index);
                technologies.set(next);
            }
        })
    };

    let onsubmit = {
        let fullname = fullname.clone();
        let email = email.clone();
        let company = company.clone();
        let domain = domain.clone();
        let message = message.clone();
        let technologies = technologies.clone();
        let error_message = error_message.clone();
        let is_submitting = is_submitting.clone();
        let toasts = toasts.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            if let Some(missing) = forms::missing_required(&[
                ("Full name", fullname.as_str()),
                ("Email", email.as_str()),
                ("Message", message.as_str()),
            ]) {
                error_message.set(Some(missing));
                return;
            }
            if !forms::is_valid_email(&email) {
                error_message.set(Some("Please enter a valid email address".to_owned()));
                return;
            }

            is_submitting.set(true);
            let payload = ContactPayload {
                fullname: fullname.trim().to_owned(),
                email: email.trim().to_owned(),
                address: "Not provided".to_owned(),
                company: (*company).clone(),
                domain: (*domain).clone(),
                technologies: technologies.join(", "),
                message: (*message).clone(),
            };

            let fullname = fullname.clone();
            let email = email.clone();
            let company = company.clone();
            let domain = domain.clone();
            let message = message.clone();
            let technologies = technologies.clone();
            let error_message = error_message.clone();
            let is_submitting = is_submitting.clone();
            let toasts = toasts.clone();

            spawn_local(async move {
                match client::CONTACTS.create::<_, serde_json::Value>(&payload).await {
                    Ok(_) => {
                        toasts.success("Thanks! We'll get back to you shortly.");
                        fullname.set(String::new());
                        email.set(String::new());
                        company.set(String::new());
                        domain.set(String::new());
                        message.set(String::new());
                        technologies.set(Vec::new());
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to send your message: {e}")));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="contact-form border rounded p-4">
            <h2 class="font-bold mb-2">{ "Tell us about your project" }</h2>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="error-message mb-2">{ error }</div> }
            } else {
                html! {}
            }}

            <form {onsubmit}>
                <input class="input w-full mb-2" placeholder="Full name"
                    value={(*fullname).clone()} oninput={on_fullname} />
                <input class="input w-full mb-2" type="email" placeholder="Email"
                    value={(*email).clone()} oninput={on_email} />
                <input class="input w-full mb-2" placeholder="Company (optional)"
                    value={(*company).clone()} oninput={on_company} />
                <input class="input w-full mb-2" placeholder="Business domain (optional)"
                    value={(*domain).clone()} oninput={on_domain} />

                <input class="input w-full mb-1" placeholder="Technologies (press Enter to add)"
                    value={(*tech_input).clone()} oninput={on_tech_input} onkeydown={on_tech_key} />
                <div class="flex gap-1 flex-wrap mb-2">
                    { for technologies.iter().enumerate().map(|(index, tech)| {
                        let remove = remove_tech.clone();
                        html! {
                            <span class="tag text-sm border rounded px-2">
                                { tech }
                                <button type="button" class="ml-1"
                                    onclick={Callback::from(move |_| remove.emit(index))}>
                                    { "×" }
                                </button>
                            </span>
                        }
                    }) }
                </div>

                <textarea class="input w-full mb-3" placeholder="What are you building?"
                    value={(*message).clone()} oninput={on_message} />

                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    { if *is_submitting { "Sending..." } else { "Send inquiry" } }
                </button>
            </form>
        </div>
    }
}

/// Splits comma-separated tag input, trimming blanks and entries already in
/// the list.
fn parse_tech_input(input: &str, existing: &[String]) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| !existing.iter().any(|have| have == tag))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_and_trims() {
        let tags = parse_tech_input(" rust , wasm ,, yew ", &[]);
        assert_eq!(tags, vec!["rust", "wasm", "yew"]);
    }

    #[test]
    fn drops_duplicates_against_existing_tags() {
        let existing = vec!["rust".to_owned()];
        assert_eq!(parse_tech_input("rust, tokio", &existing), vec!["tokio"]);
    }

    #[test]
    fn blank_input_adds_nothing() {
        assert!(parse_tech_input("  ", &[]).is_empty());
        assert!(parse_tech_input(",,,", &[]).is_empty());
    }
}
