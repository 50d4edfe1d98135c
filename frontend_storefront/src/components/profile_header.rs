// frontend_storefront/src/components/profile_header.rs
use yew::prelude::*;

use crate::styles::use_style;
use crate::types::BusinessProfile;

#[derive(Properties, PartialEq)]
pub struct ProfileHeaderProps {
    pub business: BusinessProfile,
}

/// Page header with the business name and, when present, its tagline.
#[function_component(ProfileHeader)]
pub fn profile_header(props: &ProfileHeaderProps) -> Html {
    let container = use_style("profileHeader");

    html! {
        <header class={container}>
            <h1 class="font-bold">{ props.business.name.clone() }</h1>
            { if let Some(tagline) = props.business.tagline.as_ref() {
                html! { <p class="tagline">{ tagline.clone() }</p> }
            } else {
                html! {}
            }}
        </header>
    }
}
