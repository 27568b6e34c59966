use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client;
use crate::api::models::BlogPost;
use crate::components::navbar::Navbar;
use crate::hooks::{use_collection, Fetch};
use crate::router::Route;

/// Public blog index: every post as a card linking to its detail page.
#[function_component(BlogsPage)]
pub fn blogs_page() -> Html {
    let posts = use_collection::<BlogPost>(client::BLOGS, "blog posts");

    html! {
        <>
            <Navbar />
            <section class="blog-index p-6">
                <h1 class="text-2xl font-bold mb-4">{ "From the blog" }</h1>
                {
                    match &*posts {
                        Fetch::Loading => html! { <p>{ "Loading posts..." }</p> },
                        Fetch::Ready(list) if list.is_empty() => html! {
                            <p>{ "No blog posts have been published yet." }</p>
                        },
                        Fetch::Ready(list) => html! {
                            <div class="grid grid-cols-3 gap-4">
                                { for list.iter().map(|post| html! {
                                    <article key={post.id} class="blog-card border rounded p-3">
                                        { if let Some(image) = &post.image {
                                            html! { <img src={image.clone()} alt={post.title.clone()} class="mb-2" /> }
                                        } else {
                                            html! {}
                                        }}
                                        <h2 class="font-bold mb-1">{ &post.title }</h2>
                                        { if let Some(date) = &post.date_posted {
                                            html! { <p class="text-sm mb-1">{ date }</p> }
                                        } else {
                                            html! {}
                                        }}
                                        <p class="text-sm mb-2">{ &post.summary }</p>
                                        <Link<Route> to={Route::BlogPost { id: post.id }} classes="btn btn-secondary text-sm">
                                            { "Read more" }
                                        </Link<Route>>
                                    </article>
                                }) }
                            </div>
                        },
                        Fetch::Failed(message) => html! {
                            <p class="error-message">{ format!("Could not load posts: {message}") }</p>
                        },
                    }
                }
            </section>
        </>
    }
}
