use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client;
use crate::api::models::{ClientTestimonial, Partner};
use crate::components::navbar::Navbar;
use crate::hooks::{use_collection, Fetch};
use crate::router::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <Navbar />
            <header class="hero p-6">
                <h1 class="text-2xl font-bold mb-2">
                    { "Technology consulting that ships" }
                </h1>
                <p class="mb-4">
                    { "IntelliSurge Technologies builds, modernizes, and scales software for \
                       businesses of every size." }
                </p>
                <div class="flex gap-2">
                    <Link<Route> to={Route::Services} classes="btn btn-primary">
                        { "Our Services" }
                    </Link<Route>>
                    <Link<Route> to={Route::Career} classes="btn btn-secondary">
                        { "Join the team" }
                    </Link<Route>>
                </div>
            </header>
            <PartnersSection />
            <TestimonialsSection />
        </>
    }
}

#[function_component(PartnersSection)]
fn partners_section() -> Html {
    let partners = use_collection::<Partner>(client::PARTNERS, "partners");

    html! {
        <section class="partners p-6">
            <h2 class="font-bold mb-4">{ "Companies we work with" }</h2>
            {
                match &*partners {
                    Fetch::Loading => html! { <p>{ "Loading..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {},
                    Fetch::Ready(list) => html! {
                        <div class="flex gap-4 flex-wrap">
                            { for list.iter().map(|partner| html! {
                                <figure key={partner.id} class="partner-logo">
                                    { if let Some(image) = &partner.image {
                                        html! { <img src={image.clone()} alt={partner.company.clone()} /> }
                                    } else {
                                        html! {}
                                    }}
                                    <figcaption class="text-sm">{ &partner.company }</figcaption>
                                </figure>
                            }) }
                        </div>
                    },
                    Fetch::Failed(_) => html! {},
                }
            }
        </section>
    }
}

#[function_component(TestimonialsSection)]
fn testimonials_section() -> Html {
    let testimonials =
        use_collection::<ClientTestimonial>(client::CLIENT_TESTIMONIALS, "testimonials");

    html! {
        <section class="testimonials p-6">
            <h2 class="font-bold mb-4">{ "What our clients say" }</h2>
            {
                match &*testimonials {
                    Fetch::Loading => html! { <p>{ "Loading..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {
                        <p class="text-sm">{ "No testimonials yet." }</p>
                    },
                    Fetch::Ready(list) => html! {
                        <div class="grid grid-cols-3 gap-4">
                            { for list.iter().map(|t| html! {
                                <blockquote key={t.id} class="testimonial-card p-3 border rounded">
                                    <div class="stars mb-1">{ ("★".repeat(t.stars as usize)) }</div>
                                    <p class="mb-2">{ &t.content }</p>
                                    <footer class="text-sm">
                                        { format!("{}, {}", t.author, t.position) }
                                    </footer>
                                </blockquote>
                            }) }
                        </div>
                    },
                    Fetch::Failed(_) => html! {},
                }
            }
        </section>
    }
}
