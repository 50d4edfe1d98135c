// frontend_storefront/src/components/about_section.rs
use yew::prelude::*;

use crate::styles::use_style;
use crate::types::BusinessProfile;

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub business: BusinessProfile,
}

/// Static "About Us" block of the profile page. Shows the business's
/// description verbatim; an empty description gives an empty paragraph.
#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    let container = use_style("aboutContainer");

    html! {
        <div class={container}>
            <h3>{ "About Us" }</h3>
            <p>{ props.business.description.clone() }</p>
        </div>
    }
}
