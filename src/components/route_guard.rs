use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session;

#[derive(Properties, PartialEq)]
pub struct RequireAdminProps {
    pub children: Children,
}

/// Gates the admin subtree on the persisted session flag. Unauthenticated
/// visitors are bounced to the login screen with their requested path
/// recorded so login can return them there. Rendering-only, not a security
/// boundary (see DESIGN.md).
#[function_component(RequireAdmin)]
pub fn require_admin(props: &RequireAdminProps) -> Html {
    let location = use_location();

    if session::is_authenticated() {
        html! { <>{ for props.children.iter() }</> }
    } else {
        if let Some(location) = location {
            session::remember_target(location.path());
        }
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
