use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client;
use crate::api::models::BlogPost;
use crate::components::toast::use_toasts;
use crate::forms;
use crate::hooks::{use_collection, use_delete, use_record, Fetch};
use crate::router::AdminRoute;

#[function_component(BlogList)]
pub fn blog_list() -> Html {
    let posts = use_collection::<BlogPost>(client::BLOGS, "blog posts");
    let on_delete = use_delete(client::BLOGS, posts.clone(), "blog post");

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">{ "Blog Posts" }</h1>
                <Link<AdminRoute> to={AdminRoute::NewBlog} classes="btn btn-primary">
                    { "New Post" }
                </Link<AdminRoute>>
            </div>
            {
                match &*posts {
                    Fetch::Loading => html! { <p>{ "Loading posts..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {
                        <p>{ "No blog posts yet. Write the first one!" }</p>
                    },
                    Fetch::Ready(list) => html! {
                        <table class="w-full">
                            <thead>
                                <tr>
                                    <th class="text-left">{ "Title" }</th>
                                    <th class="text-left">{ "Posted" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for list.iter().map(|post| {
                                    let delete = on_delete.clone();
                                    let id = post.id;
                                    html! {
                                        <tr key={post.id}>
                                            <td class="py-2">{ &post.title }</td>
                                            <td class="py-2">
                                                { post.date_posted.clone().unwrap_or_default() }
                                            </td>
                                            <td class="py-2 text-center">
                                                <Link<AdminRoute>
                                                    to={AdminRoute::EditBlog { id }}
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
                        <p class="error-message">{ format!("Could not load posts: {message}") }</p>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogFormProps {
    pub id: Option<u32>,
}

/// Create and edit share one form; edit mode fetches the record first and
/// prefills, including the stored image as the initial preview.
#[function_component(BlogForm)]
pub fn blog_form(props: &BlogFormProps) -> Html {
    match props.id {
        None => html! { <BlogFormInner initial={None::<BlogPost>} /> },
        Some(id) => html! { <BlogFormLoader {id} /> },
    }
}

#[derive(Properties, PartialEq)]
struct BlogFormLoaderProps {
    id: u32,
}

#[function_component(BlogFormLoader)]
fn blog_form_loader(props: &BlogFormLoaderProps) -> Html {
    let record = use_record::<BlogPost>(client::BLOGS, props.id, "blog post");
    match &*record {
        Fetch::Loading => html! { <p>{ "Loading post..." }</p> },
        Fetch::Ready(post) => html! { <BlogFormInner initial={Some(post.clone())} /> },
        Fetch::Failed(message) => html! {
            <p class="error-message">{ format!("Could not load this post: {message}") }</p>
        },
    }
}

#[derive(Properties, PartialEq)]
struct BlogFormInnerProps {
    initial: Option<BlogPost>,
}

#[function_component(BlogFormInner)]
fn blog_form_inner(props: &BlogFormInnerProps) -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().unwrap();
    let editing = props.initial.as_ref().map(|post| post.id);

    let title = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|p| p.title.clone())
            .unwrap_or_default()
    });
    let summary = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|p| p.summary.clone())
            .unwrap_or_default()
    });
    let content = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|p| p.content.clone())
            .unwrap_or_default()
    });
    let youtube_url = use_state(|| {
        props
            .initial
            .as_ref()
            .and_then(|p| p.youtube_url.clone())
            .unwrap_or_default()
    });
    let image = use_state(|| None::<File>);
    let preview = use_state(|| props.initial.as_ref().and_then(|p| p.image.clone()));
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| title.set(forms::input_value(&e)))
    };
    let on_summary = {
        let summary = summary.clone();
        Callback::from(move |e: InputEvent| summary.set(forms::textarea_value(&e)))
    };
    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| content.set(forms::textarea_value(&e)))
    };
    let on_youtube = {
        let youtube_url = youtube_url.clone();
        Callback::from(move |e: InputEvent| youtube_url.set(forms::input_value(&e)))
    };
    let on_image = {
        let image = image.clone();
        let preview = preview.clone();
        Callback::from(move |e: Event| {
            let file = forms::selected_file(&e);
            preview.set(file.as_ref().and_then(forms::preview_url));
            image.set(file);
        })
    };

    let onsubmit = {
        let title = title.clone();
        let summary = summary.clone();
        let content = content.clone();
        let youtube_url = youtube_url.clone();
        let image = image.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            if let Some(missing) = forms::missing_required(&[
                ("Title", title.as_str()),
                ("Summary", summary.as_str()),
                ("Content", content.as_str()),
            ]) {
                error_message.set(Some(missing));
                return;
            }

            is_saving.set(true);
            let fields = client::FormFields::new()
                .text("title", &title)
                .text("summary", &summary)
                .text("content", &content)
                .text("youtube_url", &youtube_url)
                .maybe_file("image", (*image).as_ref());

            let title_value = (*title).clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                let result = match editing {
                    None => client::BLOGS.create_form::<BlogPost>(fields).await,
                    Some(id) => client::BLOGS.update_form::<BlogPost>(id, fields).await,
                };
                match result {
                    Ok(_) => {
                        let verb = if editing.is_some() { "updated" } else { "created" };
                        toasts.success(format!("Blog post {verb}: \"{title_value}\""));
                        navigator.push(&AdminRoute::Blogs);
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to save blog post: {e}")));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&AdminRoute::Blogs))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">
                    { if editing.is_some() { "Edit Blog Post" } else { "Create Blog Post" } }
                </h1>
                <button class="btn btn-secondary" onclick={on_cancel}>{ "Cancel" }</button>
            </div>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="error-message mb-2">{ error }</div> }
            } else {
                html! {}
            }}

            <form {onsubmit}>
                <label class="block text-sm mb-1" for="title">{ "Title" }</label>
                <input id="title" class="input w-full mb-2"
                    value={(*title).clone()} oninput={on_title} />

                <label class="block text-sm mb-1" for="summary">{ "Summary" }</label>
                <textarea id="summary" class="input w-full mb-2"
                    value={(*summary).clone()} oninput={on_summary} />

                <label class="block text-sm mb-1" for="image">{ "Featured Image" }</label>
                <input id="image" class="input w-full mb-2" type="file" accept="image/*"
                    onchange={on_image} />
                { if let Some(url) = (*preview).as_ref() {
                    html! { <img src={url.clone()} alt="Preview" class="image-preview mb-2" /> }
                } else {
                    html! {}
                }}

                <label class="block text-sm mb-1" for="youtube_url">{ "YouTube URL" }</label>
                <input id="youtube_url" class="input w-full mb-2"
                    placeholder="https://youtube.com/watch?v=..."
                    value={(*youtube_url).clone()} oninput={on_youtube} />

                <label class="block text-sm mb-1" for="content">{ "Content" }</label>
                <textarea id="content" class="input w-full mb-3 blog-content"
                    value={(*content).clone()} oninput={on_content} />

                <button type="submit" class="btn btn-primary" disabled={*is_saving}>
                    { if *is_saving {
                        "Saving..."
                    } else if editing.is_some() {
                        "Save Changes"
                    } else {
                        "Publish Post"
                    }}
                </button>
            </form>
        </div>
    }
}
