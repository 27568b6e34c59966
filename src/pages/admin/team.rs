use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client::{self, Resource};
use crate::api::models::TeamMember;
use crate::components::toast::use_toasts;
use crate::forms;
use crate::hooks::{use_collection, use_delete, use_record, Fetch};
use crate::router::AdminRoute;

/// The site shows two separate member galleries backed by two collections:
/// the company team on the homepage and the careers-page team. Same record
/// shape, same screens, different wire path and routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roster {
    Company,
    Career,
}

impl Roster {
    pub fn resource(self) -> Resource {
        match self {
            Roster::Company => client::TEAM_MEMBERS,
            Roster::Career => client::CAREER_TEAM_MEMBERS,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Roster::Company => "Our Team",
            Roster::Career => "Careers Team",
        }
    }

    fn list_route(self) -> AdminRoute {
        match self {
            Roster::Company => AdminRoute::Team,
            Roster::Career => AdminRoute::CareerTeam,
        }
    }

    fn new_route(self) -> AdminRoute {
        match self {
            Roster::Company => AdminRoute::NewTeamMember,
            Roster::Career => AdminRoute::NewCareerTeamMember,
        }
    }

    fn edit_route(self, id: u32) -> AdminRoute {
        match self {
            Roster::Company => AdminRoute::EditTeamMember { id },
            Roster::Career => AdminRoute::EditCareerTeamMember { id },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamListProps {
    pub roster: Roster,
}

#[function_component(TeamList)]
pub fn team_list(props: &TeamListProps) -> Html {
    let roster = props.roster;
    let members = use_collection::<TeamMember>(roster.resource(), "team members");
    let on_delete = use_delete(roster.resource(), members.clone(), "team member");

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">{ roster.title() }</h1>
                <Link<AdminRoute> to={roster.new_route()} classes="btn btn-primary">
                    { "Add Member" }
                </Link<AdminRoute>>
            </div>
            {
                match &*members {
                    Fetch::Loading => html! { <p>{ "Loading members..." }</p> },
                    Fetch::Ready(list) if list.is_empty() => html! {
                        <p>{ "No team members yet." }</p>
                    },
                    Fetch::Ready(list) => html! {
                        <table class="w-full">
                            <thead>
                                <tr>
                                    <th class="text-left">{ "Name" }</th>
                                    <th class="text-left">{ "Position" }</th>
                                    <th class="text-left">{ "Photo" }</th>
                                    <th>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for list.iter().map(|member| {
                                    let delete = on_delete.clone();
                                    let id = member.id;
                                    html! {
                                        <tr key={member.id}>
                                            <td class="py-2">{ &member.name }</td>
                                            <td class="py-2">{ &member.position }</td>
                                            <td class="py-2">
                                                { match &member.image {
                                                    Some(url) => html! {
                                                        <img src={url.clone()} alt={member.name.clone()}
                                                            class="thumbnail" />
                                                    },
                                                    None => html! { { "—" } },
                                                }}
                                            </td>
                                            <td class="py-2 text-center">
                                                <Link<AdminRoute>
                                                    to={roster.edit_route(id)}
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
                        <p class="error-message">{ format!("Could not load members: {message}") }</p>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamMemberFormProps {
    pub roster: Roster,
    pub id: Option<u32>,
}

#[function_component(TeamMemberForm)]
pub fn team_member_form(props: &TeamMemberFormProps) -> Html {
    let roster = props.roster;
    match props.id {
        None => html! { <MemberFormInner {roster} initial={None::<TeamMember>} /> },
        Some(id) => html! { <MemberFormLoader {roster} {id} /> },
    }
}

#[derive(Properties, PartialEq)]
struct MemberFormLoaderProps {
    roster: Roster,
    id: u32,
}

#[function_component(MemberFormLoader)]
fn member_form_loader(props: &MemberFormLoaderProps) -> Html {
    let roster = props.roster;
    let record = use_record::<TeamMember>(roster.resource(), props.id, "team member");
    match &*record {
        Fetch::Loading => html! { <p>{ "Loading member..." }</p> },
        Fetch::Ready(member) => html! {
            <MemberFormInner {roster} initial={Some(member.clone())} />
        },
        Fetch::Failed(message) => html! {
            <p class="error-message">{ format!("Could not load this member: {message}") }</p>
        },
    }
}

#[derive(Properties, PartialEq)]
struct MemberFormInnerProps {
    roster: Roster,
    initial: Option<TeamMember>,
}

#[function_component(MemberFormInner)]
fn member_form_inner(props: &MemberFormInnerProps) -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().unwrap();
    let roster = props.roster;
    let editing = props.initial.as_ref().map(|member| member.id);

    let name = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_default()
    });
    let position = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|m| m.position.clone())
            .unwrap_or_default()
    });
    let image = use_state(|| None::<File>);
    let preview = use_state(|| props.initial.as_ref().and_then(|m| m.image.clone()));
    let error_message = use_state(|| None::<String>);
    let is_saving = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(forms::input_value(&e)))
    };
    let on_position = {
        let position = position.clone();
        Callback::from(move |e: InputEvent| position.set(forms::input_value(&e)))
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
        let name = name.clone();
        let position = position.clone();
        let image = image.clone();
        let error_message = error_message.clone();
        let is_saving = is_saving.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_message.set(None);

            if let Some(missing) = forms::missing_required(&[
                ("Name", name.as_str()),
                ("Position", position.as_str()),
            ]) {
                error_message.set(Some(missing));
                return;
            }

            is_saving.set(true);
            let fields = client::FormFields::new()
                .text("name", name.trim())
                .text("position", position.trim())
                .maybe_file("image", (*image).as_ref());

            let name_value = (*name).clone();
            let error_message = error_message.clone();
            let is_saving = is_saving.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                let resource = roster.resource();
                let result = match editing {
                    None => resource.create_form::<TeamMember>(fields).await,
                    Some(id) => resource.update_form::<TeamMember>(id, fields).await,
                };
                match result {
                    Ok(_) => {
                        let verb = if editing.is_some() { "updated" } else { "added" };
                        toasts.success(format!("Team member {verb}: {name_value}"));
                        navigator.push(&roster.list_route());
                    }
                    Err(e) => {
                        error_message.set(Some(format!("Failed to save team member: {e}")));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&roster.list_route()))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">
                    { if editing.is_some() { "Edit Team Member" } else { "Add Team Member" } }
                </h1>
                <button class="btn btn-secondary" onclick={on_cancel}>{ "Cancel" }</button>
            </div>

            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="error-message mb-2">{ error }</div> }
            } else {
                html! {}
            }}

            <form {onsubmit}>
                <label class="block text-sm mb-1" for="name">{ "Name" }</label>
                <input id="name" class="input w-full mb-2"
                    value={(*name).clone()} oninput={on_name} />

                <label class="block text-sm mb-1" for="position">{ "Position" }</label>
                <input id="position" class="input w-full mb-2"
                    value={(*position).clone()} oninput={on_position} />

                <label class="block text-sm mb-1" for="photo">{ "Photo" }</label>
                <input id="photo" class="input w-full mb-2" type="file" accept="image/*"
                    onchange={on_image} />
                { if let Some(url) = (*preview).as_ref() {
                    html! { <img src={url.clone()} alt="Preview" class="image-preview mb-2" /> }
                } else {
                    html! {}
                }}

                <button type="submit" class="btn btn-primary" disabled={*is_saving}>
                    { if *is_saving { "Saving..." } else { "Save Member" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rosters_map_to_their_own_collections() {
        assert_eq!(Roster::Company.resource(), client::TEAM_MEMBERS);
        assert_eq!(Roster::Career.resource(), client::CAREER_TEAM_MEMBERS);
    }

    #[test]
    fn roster_routes_stay_separate() {
        assert_eq!(Roster::Company.list_route(), AdminRoute::Team);
        assert_eq!(Roster::Career.list_route(), AdminRoute::CareerTeam);
        assert_eq!(
            Roster::Career.edit_route(4),
            AdminRoute::EditCareerTeamMember { id: 4 }
        );
    }
}
