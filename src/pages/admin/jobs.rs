use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client;
use crate::api::models::{JobListing, JobPayload};
use crate::components::toast::use_toasts;
use crate::forms;
use crate::hooks::{use_collection, use_delete, use_record, Fetch};
use crate::router::AdminRoute;

const JOB_TYPES: [&str; 4] = ["Full-time", "Part-time", "Contract", "Internship"];

#[function_component(JobList)]
pub fn job_list() -> Html {
    let jobs = use_collection::<JobListing>(client::JOBS, "job listings");
    let on_delete = use_delete(client::JOBS, jobs.clone(), "job listing");

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">{ "Job Listings" }</h1>
                <Link<AdminRoute> to={AdminRoute::NewJob} classes="btn btn-primary">
                    { "Post Job" }
                </Link<AdminRoute>>
            </div>
            {
                match &*jobs {
                    Fetch::Loading => html! { <p>{ "Loading listings..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {
                        <p>{ "No job listings yet." }</p>
                    },
                    Fetch::Ready(list) => html! {
                        <table class="w-full">
                            <thead>
                                <tr>
                                    <th class="text-left">{ "Title" }</th>
                                    <th class="text-left">{ "Department" }</th>
                                    <th class="text-left">{ "Location" }</th>
                                    <th class="text-left">{ "Type" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for list.iter().map(|job| {
                                    let delete = on_delete.clone();
                                    let id = job.id;
                                    html! {
                                        <tr key={job.id}>
                                            <td class="py-2">{ &job.job_title }</td>
                                            <td class="py-2">{ &job.department }</td>
                                            <td class="py-2">{ &job.location }</td>
                                            <td class="py-2">{ &job.job_type }</td>
                                            <td class="py-2 text-center">
                                                <Link<AdminRoute>
                                                    to={AdminRoute::EditJob { id }}
                                                    classes="btn btn-secondary text-sm mr-2"
                                                >
                                                    { "Edit" }
                                                </Link<AdminRoute>>
                                                <button
                                                    class="btn btn-danger text-sm"
                                                    onclick={Callback::from(move |_| delete.emit(id))}
                                                >
                                                    { "Delete" }
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    },
                    Fetch::Failed(message) => html! {
                        <p class="error-message">{ format!("Could not load listings: {message}") }</p>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct JobFormProps {
    pub id: Option<u32>,
}

#[function_component(JobForm)]
pub fn job_form(props: &JobFormProps) -> Html {
    match props.id {
        None => html! { <JobFormInner initial={None::<JobListing>} /> },
        Some(id) => html! { <JobFormLoader {id} /> },
    }
}

#[derive(Properties, PartialEq)]
struct JobFormLoaderProps {
    id: u32,
}

#[function_component(JobFormLoader)]
fn job_form_loader(props: &JobFormLoaderProps) -> Html {
    let record = use_record::<JobListing>(client::JOBS, props.id, "job listing");
    match &*record {
        Fetch::Loading => html! { <p>{ "Loading listing..." }</p> },
        Fetch::Ready(job) => html! { <JobFormInner initial={Some(job.clone())} /> },
        Fetch::Failed(message) => html! {
            <p class="error-message">{ format!("Could not load this listing: {message}") }</p>
        },
    }
}

#[derive(Properties, PartialEq)]
struct JobFormInnerProps {
    initial: Option<JobListing>,
}

#[function_component(JobFormInner)]
fn job_form_inner(props: &JobFormInnerProps) -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().unwrap();
    let editing = props.initial.as_ref().map(|job| job.id);
    let initial = props.initial.clone();

    let job_title = use_state(|| initial.as_ref().map(|j| j.job_title.clone()).unwrap_or_default());
    let department =
        use_state(|| initial.as_ref().map(|j| j.department.clone()).unwrap_or_default());
    let location = use_state(|| initial.as_ref().map(|j| j.location.clone()).unwrap_or_default());
    let job_type = use_state(|| {
        initial
            .as_ref()
            .map(|j| j.job_type.clone())
            .unwrap_or_else(|| JOB_TYPES[0].to_owned())
    });
    let salary_range =
        use_state(|| initial.as_ref().map(|j| j.salary_range.clone()).unwrap_or_default());
    let job_description =
        use_state(|| initial.as_ref().map(|j| j.job_description.clone()).unwrap_or_default());
    let requirements = use_state(|| {
        initial
            .as_ref()
            .map(|j| j.requirements_qualifications.clone())
            .unwrap_or_default()
    });
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_title = {
        let job_title = job_title.clone();
        Callback::from(move |e: InputEvent| job_title.set(forms::input_value(&e)))
    };
    let on_department = {
        let department = department.clone();
        Callback::from(move |e: InputEvent| department.set(forms::input_value(&e)))
    };
    let on_location = {
        let location = location.clone();
        Callback::from(move |e: InputEvent| location.set(forms::input_value(&e)))
    };
    let on_type = {
        let job_type = job_type.clone();
        Callback::from(move |e: Event| job_type.set(forms::select_value(&e)))
    };
    let on_salary = {
        let salary_range = salary_range.clone();
        Callback::from(move |e: InputEvent| salary_range.set(forms::input_value(&e)))
    };
    let on_description = {
        let job_description = job_description.clone();
        Callback::from(move |e: InputEvent| job_description.set(forms::textarea_value(&e)))
    };
    let on_requirements = {
        let requirements = requirements.clone();
        Callback::from(move |e: InputEvent| requirements.set(forms::textarea_value(&e)))
    };

    let onsubmit = {
        let job_title = job_title.clone();
        let department = department.clone();
        let location = location.clone();
        let job_type = job_type.clone();
        let salary_range = salary_range.clone();
        let job_description = job_description.clone();
        let requirements = requirements.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            if let Some(missing) = forms::missing_required(&[
                ("Job title", job_title.as_str()),
                ("Department", department.as_str()),
                ("Location", location.as_str()),
                ("Salary range", salary_range.as_str()),
                ("Description", job_description.as_str()),
                ("Requirements", requirements.as_str()),
            ]) {
                error_message.set(Some(missing));
                return;
            }

            is_saving.set(true);
            let payload = JobPayload {
                job_title: job_title.trim().to_owned(),
                department: department.trim().to_owned(),
                location: location.trim().to_owned(),
                job_type: (*job_type).clone(),
                salary_range: salary_range.trim().to_owned(),
                job_description: job_description.trim().to_owned(),
                requirements_qualifications: requirements.trim().to_owned(),
            };

            let title_value = (*job_title).clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                let result = match editing {
                    None => client::JOBS.create::<_, JobListing>(&payload).await,
                    Some(id) => client::JOBS.update::<_, JobListing>(id, &payload).await,
                };
                match result {
                    Ok(_) => {
                        let verb = if editing.is_some() { "updated" } else { "posted" };
                        toasts.success(format!("Job {verb}: \"{title_value}\""));
                        navigator.push(&AdminRoute::Jobs);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to save job listing: {e}")));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&AdminRoute::Jobs))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">
                    { if editing.is_some() { "Edit Job Listing" } else { "Post a Job" } }
                </h1>
                <button class="btn btn-secondary" onclick={on_cancel}>{ "Cancel" }</button>
            </div>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="error-message mb-2">{ error }</div> }
            } else {
                html! {}
            }}

            <form {onsubmit}>
                <label class="block text-sm mb-1" for="job_title">{ "Job title" }</label>
                <input id="job_title" class="input w-full mb-2"
                    value={(*job_title).clone()} oninput={on_title} />

                <div class="grid grid-cols-2 gap-2">
                    <div>
                        <label class="block text-sm mb-1" for="department">{ "Department" }</label>
                        <input id="department" class="input w-full mb-2"
                            value={(*department).clone()} oninput={on_department} />
                    </div>
                    <div>
                        <label class="block text-sm mb-1" for="location">{ "Location" }</label>
                        <input id="location" class="input w-full mb-2"
                            value={(*location).clone()} oninput={on_location} />
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-2">
                    <div>
                        <label class="block text-sm mb-1" for="job_type">{ "Type" }</label>
                        <select id="job_type" class="input w-full mb-2" onchange={on_type}>
                            { for JOB_TYPES.iter().map(|kind| html! {
                                <option value={*kind} selected={*job_type == *kind}>
                                    { *kind }
                                </option>
                            }) }
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm mb-1" for="salary_range">{ "Salary range" }</label>
                        <input id="salary_range" class="input w-full mb-2"
                            placeholder="$90k - $120k"
                            value={(*salary_range).clone()} oninput={on_salary} />
                    </div>
                </div>

                <label class="block text-sm mb-1" for="job_description">{ "Description" }</label>
                <textarea id="job_description" class="input w-full mb-2"
                    value={(*job_description).clone()} oninput={on_description} />

                <label class="block text-sm mb-1" for="requirements">
                    { "Requirements and qualifications" }
                </label>
                <textarea id="requirements" class="input w-full mb-3"
                    value={(*requirements).clone()} oninput={on_requirements} />

                <button type="submit" class="btn btn-primary" disabled={*is_saving}>
                    { if *is_saving {
                        "Saving..."
                    } else if editing.is_some() {
                        "Save Changes"
                    } else {
                        "Post Job"
                    }}
                </button>
            </form>
        </div>
    }
}
