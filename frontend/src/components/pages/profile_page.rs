use shared::{dates, mock, UserProfile};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Profile view with an edit mode. Editing happens on a draft copy; cancel
/// throws the draft away and restores the saved profile.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let profile = use_state(mock::profile);
    let draft = use_state(|| None::<UserProfile>);
    let save_success = use_state(|| false);

    let start_editing = {
        let profile = profile.clone();
        let draft = draft.clone();
        Callback::from(move |_| draft.set(Some((*profile).clone())))
    };

    let cancel_editing = {
        let draft = draft.clone();
        Callback::from(move |_| draft.set(None))
    };

    let save = {
        let profile = profile.clone();
        let draft = draft.clone();
        let save_success = save_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(edited) = (*draft).clone() {
                profile.set(edited);
                draft.set(None);
                save_success.set(true);

                let save_success = save_success.clone();
                spawn_local(async move {
                    gloo::timers::future::TimeoutFuture::new(3000).await;
                    save_success.set(false);
                });
            }
        })
    };

    // One change handler per field, all writing into the draft.
    let edit_field = |apply: fn(&mut UserProfile, String)| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(mut edited) = (*draft).clone() {
                apply(&mut edited, input.value());
                draft.set(Some(edited));
            }
        })
    };

    html! {
        <div class="profile-page">
            <header class="page-header">
                <h1>{"Profile"}</h1>
                {if draft.is_none() {
                    html! {
                        <button class="btn btn-primary" onclick={start_editing}>{"Edit Profile"}</button>
                    }
                } else { html! {} }}
            </header>

            {if *save_success {
                html! { <div class="form-message success">{"Profile updated"}</div> }
            } else { html! {} }}

            {if let Some(edited) = (*draft).clone() {
                html! {
                    <form class="profile-form" onsubmit={save}>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="first-name">{"First name"}</label>
                                <input
                                    type="text"
                                    id="first-name"
                                    value={edited.first_name.clone()}
                                    onchange={edit_field(|p, v| p.first_name = v)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="last-name">{"Last name"}</label>
                                <input
                                    type="text"
                                    id="last-name"
                                    value={edited.last_name.clone()}
                                    onchange={edit_field(|p, v| p.last_name = v)}
                                />
                            </div>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="email">{"Email"}</label>
                                <input
                                    type="email"
                                    id="email"
                                    value={edited.email.clone()}
                                    onchange={edit_field(|p, v| p.email = v)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="phone">{"Phone"}</label>
                                <input
                                    type="tel"
                                    id="phone"
                                    value={edited.phone.clone()}
                                    onchange={edit_field(|p, v| p.phone = v)}
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="street">{"Street"}</label>
                            <input
                                type="text"
                                id="street"
                                value={edited.address.street.clone()}
                                onchange={edit_field(|p, v| p.address.street = v)}
                            />
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="city">{"City"}</label>
                                <input
                                    type="text"
                                    id="city"
                                    value={edited.address.city.clone()}
                                    onchange={edit_field(|p, v| p.address.city = v)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="state">{"State"}</label>
                                <input
                                    type="text"
                                    id="state"
                                    value={edited.address.state.clone()}
                                    onchange={edit_field(|p, v| p.address.state = v)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="zip">{"ZIP code"}</label>
                                <input
                                    type="text"
                                    id="zip"
                                    value={edited.address.zip_code.clone()}
                                    onchange={edit_field(|p, v| p.address.zip_code = v)}
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="country">{"Country"}</label>
                            <input
                                type="text"
                                id="country"
                                value={edited.address.country.clone()}
                                onchange={edit_field(|p, v| p.address.country = v)}
                            />
                        </div>
                        <div class="dialog-actions">
                            <button type="button" class="btn btn-secondary" onclick={cancel_editing}>
                                {"Cancel"}
                            </button>
                            <button type="submit" class="btn btn-primary">{"Save Changes"}</button>
                        </div>
                    </form>
                }
            } else {
                html! {
                    <div class="profile-view">
                        <div class="profile-card">
                            <div class="avatar">{profile.initials()}</div>
                            <h2>{profile.full_name()}</h2>
                            <span class={profile.tier.badge().css_class()}>
                                {format!("{} Member", profile.tier.label())}
                            </span>
                            <p class="profile-meta">
                                {format!("Member since {}", dates::format_long_date(profile.member_since))}
                            </p>
                            <p class="profile-meta">
                                {format!("Last login {}", dates::format_timestamp(profile.last_login))}
                            </p>
                        </div>

                        <dl class="detail-list">
                            <dt>{"Customer ID"}</dt>
                            <dd>{&profile.id}</dd>
                            <dt>{"Email"}</dt>
                            <dd>{&profile.email}</dd>
                            <dt>{"Phone"}</dt>
                            <dd>{&profile.phone}</dd>
                            <dt>{"Address"}</dt>
                            <dd>
                                {format!(
                                    "{}, {}, {} {}, {}",
                                    profile.address.street,
                                    profile.address.city,
                                    profile.address.state,
                                    profile.address.zip_code,
                                    profile.address.country
                                )}
                            </dd>
                            <dt>{"Date of birth"}</dt>
                            <dd>{dates::format_long_date(profile.date_of_birth)}</dd>
                            <dt>{"Security level"}</dt>
                            <dd>{profile.security_level.label()}</dd>
                        </dl>
                    </div>
                }
            }}
        </div>
    }
}
