use yew::prelude::*;

use crate::api::client;
use crate::api::models::BlogPost;
use crate::components::navbar::Navbar;
use crate::hooks::{use_record, Fetch};

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub id: u32,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    let post = use_record::<BlogPost>(client::BLOGS, props.id, "blog post");

    html! {
        <>
            <Navbar />
            <article class="blog-detail p-6">
                {
                    match &*post {
                        Fetch::Loading => html! { <p>{ "Loading post..." }</p> },
                        Fetch::Ready(post) => html! {
                            <>
                                <h1 class="text-2xl font-bold mb-2">{ &post.title }</h1>
                                { if let Some(date) = &post.date_posted {
                                    html! { <p class="text-sm mb-4">{ date }</p> }
                                } else {
                                    html! {}
                                }}
                                { if let Some(image) = &post.image {
                                    html! { <img src={image.clone()} alt={post.title.clone()} class="mb-4" /> }
                                } else {
                                    html! {}
                                }}
                                <p class="mb-4">{ &post.content }</p>
                                { if let Some(embed) = post.youtube_url.as_deref().and_then(youtube_embed_url) {
                                    html! {
                                        <iframe
                                            src={embed}
                                            title={post.title.clone()}
                                            allowfullscreen=true
                                            class="blog-video"
                                        />
                                    }
                                } else {
                                    html! {}
                                }}
                            </>
                        },
                        Fetch::Failed(message) => html! {
                            <p class="error-message">{ format!("Could not load this post: {message}") }</p>
                        },
                    }
                }
            </article>
        </>
    }
}

/// Turns the stored YouTube link into an embeddable player URL. Accepts the
/// watch, short, and already-embedded forms; anything else is not embedded.
fn youtube_embed_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    if url.contains("/embed/") {
        return Some(url.to_owned());
    }
    if let Some(rest) = url.split("watch?v=").nth(1) {
        let id = rest.split('&').next().unwrap_or(rest);
        return Some(format!("https://www.youtube.com/embed/{id}"));
    }
    if let Some(rest) = url.split("youtu.be/").nth(1) {
        let id = rest.split('?').next().unwrap_or(rest);
        return Some(format!("https://www.youtube.com/embed/{id}"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_urls_become_embeds() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?v=abc123").as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?v=abc123&t=42").as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn short_urls_become_embeds() {
        assert_eq!(
            youtube_embed_url("https://youtu.be/xyz?si=share").as_deref(),
            Some("https://www.youtube.com/embed/xyz")
        );
    }

    #[test]
    fn embed_urls_pass_through() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/embed/abc").as_deref(),
            Some("https://www.youtube.com/embed/abc")
        );
    }

    #[test]
    fn unrecognized_urls_are_skipped() {
        assert_eq!(youtube_embed_url(""), None);
        assert_eq!(youtube_embed_url("https://vimeo.com/123"), None);
    }
}
