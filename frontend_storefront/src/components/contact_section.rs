// frontend_storefront/src/components/contact_section.rs
use yew::prelude::*;

use crate::styles::use_style;
use crate::types::BusinessProfile;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub business: BusinessProfile,
}

/// Contact details block. Lines whose field is absent are omitted
/// entirely rather than rendered empty.
#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let container = use_style("contactContainer");

    let row = |label: &'static str, value: &Option<String>| -> Html {
        match value {
            Some(value) => html! {
                <li><span class="font-bold">{ label }</span>{ " " }{ value.clone() }</li>
            },
            None => html! {},
        }
    };

    html! {
        <div class={container}>
            <h3>{ "Contact" }</h3>
            <ul>
                { row("Email:", &props.business.email) }
                { row("Phone:", &props.business.phone) }
                { row("Address:", &props.business.address) }
            </ul>
        </div>
    }
}
