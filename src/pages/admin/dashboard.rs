use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client;
use crate::api::ApiError;
use crate::router::AdminRoute;

/// One dashboard tile: resource label plus its count or failure message.
type CountOutcome = (&'static str, Result<usize, String>);

/// Admin landing page. Issues the four count fetches concurrently and keeps
/// each outcome separate, so one failing collection renders as a single error
/// line while the rest still show their numbers.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let outcomes = use_state(|| None::<Vec<CountOutcome>>);

    {
        let outcomes = outcomes.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let (blogs, jobs, admins, applications) = futures::join!(
                    client::BLOGS.count(),
                    client::JOBS.count(),
                    client::ADMINS.count(),
                    client::APPLICATIONS.count(),
                );
                outcomes.set(Some(collect_outcomes(blogs, jobs, admins, applications)));
            });
            || ()
        });
    }

    html! {
        <div class="dashboard">
            <h1 class="text-2xl font-bold mb-4">{ "Dashboard" }</h1>
            {
                match &*outcomes {
                    None => html! { <p>{ "Loading data..." }</p> },
                    Some(outcomes) => {
                        let failures: Vec<&str> = outcomes
                            .iter()
                            .filter(|(_, result)| result.is_err())
                            .map(|(label, _)| *label)
                            .collect();
                        html! {
                            <>
                                { if failures.is_empty() {
                                    html! {}
                                } else {
                                    html! {
                                        <ul class="dashboard-errors error-message mb-4">
                                            { for failures.iter().map(|label| html! {
                                                <li>{ format!("Failed to load {label}.") }</li>
                                            }) }
                                        </ul>
                                    }
                                }}
                                <div class="grid grid-cols-4 gap-4 mb-6">
                                    { for outcomes.iter().map(|(label, result)| html! {
                                        <div class="stat-card border rounded p-3">
                                            <p class="text-sm mb-1">{ *label }</p>
                                            <p class="text-2xl font-bold">
                                                { match result {
                                                    Ok(count) => count.to_string(),
                                                    Err(_) => "—".to_owned(),
                                                }}
                                            </p>
                                        </div>
                                    }) }
                                </div>
                            </>
                        }
                    }
                }
            }
            <section class="quick-actions">
                <h2 class="font-bold mb-2">{ "Quick Actions" }</h2>
                <div class="flex gap-2">
                    <Link<AdminRoute> to={AdminRoute::NewBlog} classes="btn btn-secondary">
                        { "New Blog Post" }
                    </Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::NewJob} classes="btn btn-secondary">
                        { "Post Job" }
                    </Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::NewAdmin} classes="btn btn-secondary">
                        { "Add Admin" }
                    </Link<AdminRoute>>
                </div>
            </section>
        </div>
    }
}

fn collect_outcomes(
    blogs: Result<usize, ApiError>,
    jobs: Result<usize, ApiError>,
    admins: Result<usize, ApiError>,
    applications: Result<usize, ApiError>,
) -> Vec<CountOutcome> {
    let stringify = |result: Result<usize, ApiError>| result.map_err(|e| e.to_string());
    vec![
        ("Blog Posts", stringify(blogs)),
        ("Job Listings", stringify(jobs)),
        ("Admins", stringify(admins)),
        ("Applications", stringify(applications)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;

    #[test]
    fn partial_failure_keeps_successful_counts() {
        let failure = ApiError {
            kind: ApiErrorKind::Network,
            message: "No response from server".to_owned(),
        };
        let outcomes = collect_outcomes(Ok(3), Err(failure), Ok(2), Ok(9));

        let successes: Vec<_> = outcomes
            .iter()
            .filter_map(|(label, result)| result.as_ref().ok().map(|count| (*label, *count)))
            .collect();
        let failures: Vec<_> = outcomes
            .iter()
            .filter(|(_, result)| result.is_err())
            .map(|(label, _)| *label)
            .collect();

        assert_eq!(
            successes,
            vec![("Blog Posts", 3), ("Admins", 2), ("Applications", 9)]
        );
        assert_eq!(failures, vec!["Job Listings"]);
    }
}
