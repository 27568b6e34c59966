use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::{AdminRoute, Route};
use crate::session;

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Children,
}

/// Admin shell: sidebar navigation on the left, the active CRUD screen in the
/// outlet on the right.
#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let navigator = use_navigator().expect("admin layout rendered outside a router");

    let on_logout = Callback::from(move |_| {
        session::logout();
        navigator.push(&Route::Login);
    });

    html! {
        <div class="admin-shell grid grid-cols-5 h-screen">
            <aside class="admin-sidebar col-span-1 p-3 border-r overflow-y-auto">
                <h2 class="font-bold mb-4">{ "Admin Console" }</h2>
                <nav class="flex flex-col gap-2">
                    <Link<AdminRoute> to={AdminRoute::Dashboard}>{ "Dashboard" }</Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::Blogs}>{ "Blog Posts" }</Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::Jobs}>{ "Job Listings" }</Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::Applications}>{ "Job Applications" }</Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::ClientTestimonials}>{ "Client Testimonials" }</Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::TeamTestimonials}>{ "Team Testimonials" }</Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::Team}>{ "Our Team" }</Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::CareerTeam}>{ "Careers Page Team" }</Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::Partners}>{ "Partners" }</Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::Admins}>{ "Admin Accounts" }</Link<AdminRoute>>
                    <Link<AdminRoute> to={AdminRoute::Contacts}>{ "Contact Messages" }</Link<AdminRoute>>
                </nav>
                <div class="mt-6 flex flex-col gap-2">
                    <Link<Route> to={Route::Home} classes="text-sm">{ "View site" }</Link<Route>>
                    <button class="btn btn-danger text-sm" onclick={on_logout}>
                        { "Logout" }
                    </button>
                </div>
            </aside>
            <main class="admin-outlet col-span-4 p-4 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
