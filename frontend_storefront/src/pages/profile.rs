// frontend_storefront/src/pages/profile.rs
use yew::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::contact_section::ContactSection;
use crate::components::profile_header::ProfileHeader;
use crate::styles::use_style;
use crate::types::BusinessProfile;

/// Parent container for the public profile page. Owns the fetched
/// [`BusinessProfile`] and hands it to the presentational sections.
#[function_component(Profile)]
pub fn profile() -> Html {
    let business = use_state(|| None as Option<BusinessProfile>);
    let error_message = use_state(|| None as Option<String>);

    {
        let business = business.clone();
        let error_message = error_message.clone();
        use_effect_with((), move |_| {
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                crate::config_file::load_config().await;
                crate::api::business::api_get_business(Some(
                    move |result: Result<BusinessProfile, String>| match result {
                        Ok(profile) => business.set(Some(profile)),
                        Err(err) => error_message.set(Some(err)),
                    },
                ));
            });
            #[cfg(not(target_arch = "wasm32"))]
            let _ = (business, error_message);
            || ()
        });
    }

    let page = use_style("profilePage");

    html! {
        <div class={page}>
            { if let Some(error) = (*error_message).as_ref() {
                html! { <div class="error-message mb-2" style="color: red;">{ error }</div> }
            } else {
                html! {}
            }}
            { match (*business).as_ref() {
                Some(profile) => html! {
                    <>
                        <ProfileHeader business={profile.clone()} />
                        <AboutSection business={profile.clone()} />
                        <ContactSection business={profile.clone()} />
                    </>
                },
                None if error_message.is_none() => html! { <p>{ "Loading..." }</p> },
                None => html! {},
            }}
        </div>
    }
}
