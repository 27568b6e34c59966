use std::collections::HashMap;

use futures::future::join_all;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::client;
use crate::api::models::{JobApplication, JobListing};
use crate::hooks::{use_collection, use_delete, Fetch};

/// Job applications with the title of the job each one targets. Titles come
/// from per-id lookups issued after the list arrives; a listing that was since
/// deleted just shows its raw id instead of blocking the table.
#[function_component(ApplicationList)]
pub fn application_list() -> Html {
    let applications = use_collection::<JobApplication>(client::APPLICATIONS, "applications");
    let on_delete = use_delete(client::APPLICATIONS, applications.clone(), "application");
    let job_titles = use_state(HashMap::<u32, String>::new);

    {
        let job_titles = job_titles.clone();
        use_effect_with((*applications).clone(), move |rows| {
            if let Fetch::Ready(rows) = rows {
                let ids = unique_job_ids(rows);
                spawn_local(async move {
                    let lookups = ids
                        .iter()
                        .map(|id| client::JOBS.get::<JobListing>(*id));
                    let resolved = join_all(lookups)
                        .await
                        .into_iter()
                        .filter_map(|result| result.ok())
                        .map(|job| (job.id, job.job_title))
                        .collect::<HashMap<_, _>>();
                    job_titles.set(resolved);
                });
            }
            || ()
        });
    }

    html! {
        <div>
            <h1 class="text-2xl font-bold mb-4">{ "Applications" }</h1>
            {
                match &*applications {
                    Fetch::Loading => html! { <p>{ "Loading applications..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {
                        <p>{ "No applications yet." }</p>
                    },
                    Fetch::Ready(list) => html! {
                        <table class="w-full">
                            <thead>
                                <tr>
                                    <th class="text-left">{ "Applicant" }</th>
                                    <th class="text-left">{ "Email" }</th>
                                    <th class="text-left">{ "Position" }</th>
                                    <th class="text-left">{ "Resume" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for list.iter().map(|application| {
                                    let delete = on_delete.clone();
                                    let id = application.id;
                                    let position = job_titles
                                        .get(&application.job)
                                        .cloned()
                                        .unwrap_or_else(|| format!("Job #{}", application.job));
                                    html! {
                                        <tr key={application.id}>
                                            <td class="py-2">{ &application.name }</td>
                                            <td class="py-2">{ &application.email }</td>
                                            <td class="py-2">{ position }</td>
                                            <td class="py-2">
                                                { match &application.resume {
                                                    Some(url) => html! {
                                                        <a href={url.clone()} target="_blank" rel="noopener">
                                                            { "View resume" }
                                                        </a>
                                                    },
                                                    None => html! { { "—" } },
                                                }}
                                            </td>
                                            <td class="py-2 text-center">
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
                        <p class="error-message">{ format!("Could not load applications: {message}") }</p>
                    },
                }
            }
        </div>
    }
}

/// Each job is fetched once no matter how many applications target it.
fn unique_job_ids(applications: &[JobApplication]) -> Vec<u32> {
    let mut ids = Vec::new();
    for application in applications {
        if !ids.contains(&application.job) {
            ids.push(application.job);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(id: u32, job: u32) -> JobApplication {
        JobApplication {
            id,
            job,
            name: "A".to_owned(),
            email: "a@example.com".to_owned(),
            resume: None,
        }
    }

    #[test]
    fn job_ids_deduplicate_in_order() {
        let rows = [
            application(1, 7),
            application(2, 3),
            application(3, 7),
            application(4, 3),
        ];
        assert_eq!(unique_job_ids(&rows), vec![7, 3]);
    }

    #[test]
    fn no_applications_means_no_lookups() {
        assert!(unique_job_ids(&[]).is_empty());
    }
}
