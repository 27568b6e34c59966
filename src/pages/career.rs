use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::api::client;
use crate::api::models::JobListing;
use crate::components::navbar::Navbar;
use crate::components::toast::use_toasts;
use crate::forms;
use crate::hooks::{use_collection, Fetch};

/// Careers page: open positions with client-side search and department
/// filtering over the already-fetched set, plus an application form with a
/// resume upload.
#[function_component(CareerPage)]
pub fn career_page() -> Html {
    let jobs = use_collection::<JobListing>(client::JOBS, "job listings");
    let search = use_state(String::new);
    let department = use_state(|| "All".to_owned());
    let applying_to = use_state(|| None::<JobListing>);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| search.set(forms::input_value(&e)))
    };

    let pick_department = {
        let department = department.clone();
        Callback::from(move |name: String| department.set(name))
    };

    let open_application = {
        let applying_to = applying_to.clone();
        Callback::from(move |job: JobListing| applying_to.set(Some(job)))
    };

    let close_application = {
        let applying_to = applying_to.clone();
        Callback::from(move |_| applying_to.set(None))
    };

    html! {
        <>
            <Navbar />
            <section class="careers p-6">
                <h1 class="text-2xl font-bold mb-4">{ "Open positions" }</h1>
                {
                    match &*jobs {
                        Fetch::Loading => html! { <p>{ "Loading positions..." }</p> },
                        Fetch::Ready(list) if list.is_empty() => html! {
                            <p>{ "There are no open positions right now. Check back soon!" }</p>
                        },
                        Fetch::Ready(list) => {
                            let filtered = filter_jobs(list, &search, &department);
                            html! {
                                <>
                                    <input
                                        class="input w-full mb-3"
                                        placeholder="Search roles..."
                                        value={(*search).clone()}
                                        oninput={on_search}
                                    />
                                    <div class="flex gap-2 mb-4 flex-wrap">
                                        { for departments(list).into_iter().map(|name| {
                                            let pick = pick_department.clone();
                                            let selected = *department == name;
                                            let label = name.clone();
                                            html! {
                                                <button
                                                    class={if selected { "btn btn-primary text-sm" } else { "btn btn-secondary text-sm" }}
                                                    onclick={Callback::from(move |_| pick.emit(name.clone()))}
                                                >
                                                    { label }
                                                </button>
                                            }
                                        }) }
                                    </div>
                                    { if filtered.is_empty() {
                                        html! { <p>{ "No roles match your search." }</p> }
                                    } else {
                                        html! {
                                            <div class="flex flex-col gap-3">
                                                { for filtered.iter().map(|job| {
                                                    let open = open_application.clone();
                                                    let job_for_apply = (*job).clone();
                                                    html! {
                                                        <article key={job.id} class="job-card border rounded p-3">
                                                            <h2 class="font-bold">{ &job.job_title }</h2>
                                                            <p class="text-sm mb-1">
                                                                { format!("{} • {} • {}", job.department, job.location, job.job_type) }
                                                            </p>
                                                            <p class="text-sm mb-1">{ &job.salary_range }</p>
                                                            <p class="mb-2">{ &job.job_description }</p>
                                                            <button
                                                                class="btn btn-primary text-sm"
                                                                onclick={Callback::from(move |_| open.emit(job_for_apply.clone()))}
                                                            >
                                                                { "Apply" }
                                                            </button>
                                                        </article>
                                                    }
                                                }) }
                                            </div>
                                        }
                                    }}
                                </>
                            }
                        }
                        Fetch::Failed(message) => html! {
                            <p class="error-message">{ format!("Could not load positions: {message}") }</p>
                        },
                    }
                }
                { if let Some(job) = (*applying_to).clone() {
                    html! { <ApplicationForm {job} on_close={close_application} /> }
                } else {
                    html! {}
                }}
            </section>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ApplicationFormProps {
    job: JobListing,
    on_close: Callback<()>,
}

#[function_component(ApplicationForm)]
fn application_form(props: &ApplicationFormProps) -> Html {
    let toasts = use_toasts();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let resume = use_state(|| None::<File>);
    let error_message = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(forms::input_value(&e)))
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(forms::input_value(&e)))
    };
    let on_resume = {
        let resume = resume.clone();
        Callback::from(move |e: Event| resume.set(forms::selected_file(&e)))
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let resume = resume.clone();
        let error_message = error_message.clone();
        let is_submitting = is_submitting.clone();
        let toasts = toasts.clone();
        let on_close = props.on_close.clone();
        let job_id = props.job.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            if let Some(message) =
                forms::missing_required(&[("Name", name.as_str()), ("Email", email.as_str())])
            {
                error_message.set(Some(message));
                return;
            }
            if !forms::is_valid_email(&email) {
                error_message.set(Some("Please enter a valid email address".to_owned()));
                return;
            }
            let Some(file) = (*resume).clone() else {
                error_message.set(Some("Please attach your resume (PDF)".to_owned()));
                return;
            };

            is_submitting.set(true);
            let fields = client::FormFields::new()
                .text("job", &job_id.to_string())
                .text("name", name.trim())
                .text("email", email.trim())
                .file("resume", &file);

            let error_message = error_message.clone();
            let is_submitting = is_submitting.clone();
            let toasts = toasts.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                match client::APPLICATIONS
                    .create_form::<serde_json::Value>(fields)
                    .await
                {
                    Ok(_) => {
                        toasts.success("Application submitted. We'll be in touch!");
                        on_close.emit(());
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to submit application: {e}")));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="apply-form border rounded p-4 mt-4">
            <h2 class="font-bold mb-2">{ format!("Apply for {}", props.job.job_title) }</h2>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="error-message mb-2">{ error }</div> }
            } else {
                html! {}
            }}

            <form {onsubmit}>
                <label class="block text-sm mb-1" for="applicant-name">{ "Full name" }</label>
                <input
                    id="applicant-name"
                    class="input w-full mb-2"
                    value={(*name).clone()}
                    oninput={on_name}
                />

                <label class="block text-sm mb-1" for="applicant-email">{ "Email" }</label>
                <input
                    id="applicant-email"
                    class="input w-full mb-2"
                    type="email"
                    value={(*email).clone()}
                    oninput={on_email}
                />

                <label class="block text-sm mb-1" for="applicant-resume">{ "Resume (PDF)" }</label>
                <input
                    id="applicant-resume"
                    class="input w-full mb-3"
                    type="file"
                    accept="application/pdf"
                    onchange={on_resume}
                />

                <div class="flex gap-2">
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        { if *is_submitting { "Submitting..." } else { "Submit application" } }
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        { "Cancel" }
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Department filter options: "All" plus every department present, in first
/// appearance order.
fn departments(jobs: &[JobListing]) -> Vec<String> {
    let mut names = vec!["All".to_owned()];
    for job in jobs {
        if !names.contains(&job.department) {
            names.push(job.department.clone());
        }
    }
    names
}

/// Case-insensitive title search combined with an exact department filter,
/// applied entirely client-side.
fn filter_jobs<'a>(jobs: &'a [JobListing], query: &str, department: &str) -> Vec<&'a JobListing> {
    let query = query.trim().to_lowercase();
    jobs.iter()
        .filter(|job| {
            let title_match = query.is_empty() || job.job_title.to_lowercase().contains(&query);
            let department_match = department == "All" || job.department == department;
            title_match && department_match
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u32, title: &str, department: &str) -> JobListing {
        JobListing {
            id,
            job_title: title.to_owned(),
            department: department.to_owned(),
            location: "Remote".to_owned(),
            job_type: "Full-time".to_owned(),
            salary_range: "$".to_owned(),
            job_description: String::new(),
            requirements_qualifications: String::new(),
        }
    }

    #[test]
    fn departments_start_with_all_and_deduplicate() {
        let jobs = [
            job(1, "Dev", "Engineering"),
            job(2, "QA", "Engineering"),
            job(3, "Designer", "Design"),
        ];
        assert_eq!(departments(&jobs), vec!["All", "Engineering", "Design"]);
    }

    #[test]
    fn search_is_case_insensitive_on_titles() {
        let jobs = [job(1, "Senior Rust Developer", "Engineering")];
        assert_eq!(filter_jobs(&jobs, "rust", "All").len(), 1);
        assert_eq!(filter_jobs(&jobs, "RUST", "All").len(), 1);
        assert_eq!(filter_jobs(&jobs, "python", "All").len(), 0);
    }

    #[test]
    fn department_filter_is_exact() {
        let jobs = [
            job(1, "Dev", "Engineering"),
            job(2, "Designer", "Design"),
        ];
        let engineering = filter_jobs(&jobs, "", "Engineering");
        assert_eq!(engineering.len(), 1);
        assert_eq!(engineering[0].id, 1);
        assert_eq!(filter_jobs(&jobs, "", "All").len(), 2);
    }

    #[test]
    fn filters_combine() {
        let jobs = [
            job(1, "Rust Developer", "Engineering"),
            job(2, "Rust Evangelist", "Marketing"),
        ];
        let hits = filter_jobs(&jobs, "rust", "Marketing");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }
}
