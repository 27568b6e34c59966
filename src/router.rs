use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::route_guard::RequireAdmin;
use crate::pages::admin;
use crate::pages::blog_post::BlogPostPage;
use crate::pages::blogs::BlogsPage;
use crate::pages::career::CareerPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::services::ServicesPage;

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blogs")]
    Blogs,
    #[at("/blogs/:id")]
    BlogPost { id: u32 },
    #[at("/career")]
    Career,
    #[at("/service")]
    Services,
    #[at("/login")]
    Login,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum AdminRoute {
    #[at("/admin")]
    Dashboard,
    #[at("/admin/blogs")]
    Blogs,
    #[at("/admin/blogs/new")]
    NewBlog,
    #[at("/admin/blogs/edit/:id")]
    EditBlog { id: u32 },
    #[at("/admin/jobs")]
    Jobs,
    #[at("/admin/jobs/new")]
    NewJob,
    #[at("/admin/jobs/edit/:id")]
    EditJob { id: u32 },
    #[at("/admin/applications")]
    Applications,
    #[at("/admin/client-testimonials")]
    ClientTestimonials,
    #[at("/admin/client-testimonials/new")]
    NewClientTestimonial,
    #[at("/admin/client-testimonials/edit/:id")]
    EditClientTestimonial { id: u32 },
    #[at("/admin/team-testimonials")]
    TeamTestimonials,
    #[at("/admin/team-testimonials/new")]
    NewTeamTestimonial,
    #[at("/admin/team-testimonials/edit/:id")]
    EditTeamTestimonial { id: u32 },
    #[at("/admin/team")]
    Team,
    #[at("/admin/team/new")]
    NewTeamMember,
    #[at("/admin/team/edit/:id")]
    EditTeamMember { id: u32 },
    #[at("/admin/career-team")]
    CareerTeam,
    #[at("/admin/career-team/new")]
    NewCareerTeamMember,
    #[at("/admin/career-team/edit/:id")]
    EditCareerTeamMember { id: u32 },
    #[at("/admin/partners")]
    Partners,
    #[at("/admin/partners/new")]
    NewPartner,
    #[at("/admin/partners/edit/:id")]
    EditPartner { id: u32 },
    #[at("/admin/admins")]
    Admins,
    #[at("/admin/admins/new")]
    NewAdmin,
    #[at("/admin/contacts")]
    Contacts,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! { <Switch<Route> render={switch} /> }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Blogs => html! { <BlogsPage /> },
        Route::BlogPost { id } => html! { <BlogPostPage {id} /> },
        Route::Career => html! { <CareerPage /> },
        Route::Services => html! { <ServicesPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::AdminRoot | Route::Admin => html! {
            <RequireAdmin>
                <AdminLayout>
                    <Switch<AdminRoute> render={switch_admin} />
                </AdminLayout>
            </RequireAdmin>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

fn switch_admin(route: AdminRoute) -> Html {
    match route {
        AdminRoute::Dashboard => html! { <admin::dashboard::Dashboard /> },
        AdminRoute::Blogs => html! { <admin::blogs::BlogList /> },
        AdminRoute::NewBlog => html! { <admin::blogs::BlogForm id={None::<u32>} /> },
        AdminRoute::EditBlog { id } => html! { <admin::blogs::BlogForm id={Some(id)} /> },
        AdminRoute::Jobs => html! { <admin::jobs::JobList /> },
        AdminRoute::NewJob => html! { <admin::jobs::JobForm id={None::<u32>} /> },
        AdminRoute::EditJob { id } => html! { <admin::jobs::JobForm id={Some(id)} /> },
        AdminRoute::Applications => html! { <admin::applications::ApplicationList /> },
        AdminRoute::ClientTestimonials => {
            html! { <admin::client_testimonials::ClientTestimonialList /> }
        }
        AdminRoute::NewClientTestimonial => {
            html! { <admin::client_testimonials::ClientTestimonialForm id={None::<u32>} /> }
        }
        AdminRoute::EditClientTestimonial { id } => {
            html! { <admin::client_testimonials::ClientTestimonialForm id={Some(id)} /> }
        }
        AdminRoute::TeamTestimonials => {
            html! { <admin::team_testimonials::TeamTestimonialList /> }
        }
        AdminRoute::NewTeamTestimonial => {
            html! { <admin::team_testimonials::TeamTestimonialForm id={None::<u32>} /> }
        }
        AdminRoute::EditTeamTestimonial { id } => {
            html! { <admin::team_testimonials::TeamTestimonialForm id={Some(id)} /> }
        }
        AdminRoute::Team => html! { <admin::team::TeamList roster={admin::team::Roster::Company} /> },
        AdminRoute::NewTeamMember => {
            html! { <admin::team::TeamMemberForm roster={admin::team::Roster::Company} id={None::<u32>} /> }
        }
        AdminRoute::EditTeamMember { id } => {
            html! { <admin::team::TeamMemberForm roster={admin::team::Roster::Company} id={Some(id)} /> }
        }
        AdminRoute::CareerTeam => {
            html! { <admin::team::TeamList roster={admin::team::Roster::Career} /> }
        }
        AdminRoute::NewCareerTeamMember => {
            html! { <admin::team::TeamMemberForm roster={admin::team::Roster::Career} id={None::<u32>} /> }
        }
        AdminRoute::EditCareerTeamMember { id } => {
            html! { <admin::team::TeamMemberForm roster={admin::team::Roster::Career} id={Some(id)} /> }
        }
        AdminRoute::Partners => html! { <admin::partners::PartnerList /> },
        AdminRoute::NewPartner => html! { <admin::partners::PartnerForm id={None::<u32>} /> },
        AdminRoute::EditPartner { id } => html! { <admin::partners::PartnerForm id={Some(id)} /> },
        AdminRoute::Admins => html! { <admin::admins::AdminList /> },
        AdminRoute::NewAdmin => html! { <admin::admins::AdminForm /> },
        AdminRoute::Contacts => html! { <admin::contacts::ContactList /> },
        AdminRoute::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_paths_resolve() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/blogs"), Some(Route::Blogs));
        assert_eq!(
            Route::recognize("/blogs/7"),
            Some(Route::BlogPost { id: 7 })
        );
        assert_eq!(Route::recognize("/career"), Some(Route::Career));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
    }

    #[test]
    fn admin_paths_resolve_through_the_wildcard() {
        assert_eq!(Route::recognize("/admin"), Some(Route::AdminRoot));
        assert_eq!(Route::recognize("/admin/blogs"), Some(Route::Admin));
        assert_eq!(Route::recognize("/admin/jobs/edit/3"), Some(Route::Admin));
    }

    #[test]
    fn admin_subroutes_resolve() {
        assert_eq!(
            AdminRoute::recognize("/admin"),
            Some(AdminRoute::Dashboard)
        );
        assert_eq!(
            AdminRoute::recognize("/admin/blogs/new"),
            Some(AdminRoute::NewBlog)
        );
        assert_eq!(
            AdminRoute::recognize("/admin/blogs/edit/42"),
            Some(AdminRoute::EditBlog { id: 42 })
        );
        assert_eq!(
            AdminRoute::recognize("/admin/career-team/edit/5"),
            Some(AdminRoute::EditCareerTeamMember { id: 5 })
        );
        assert_eq!(
            AdminRoute::recognize("/admin/contacts"),
            Some(AdminRoute::Contacts)
        );
    }
}
