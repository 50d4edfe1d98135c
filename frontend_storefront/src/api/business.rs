// frontend_storefront/src/api/business.rs
use gloo::net::http::Request;
use wasm_bindgen_futures::spawn_local;

use crate::api::utils::handle_api_response;
use crate::config_file::get_env_var;
use crate::types::BusinessProfile;

/// Get the business profile from the server
pub fn api_get_business<F>(callback: Option<F>)
where
    F: FnOnce(Result<BusinessProfile, String>) + 'static,
{
    let api_url = get_env_var("API_URL");

    spawn_local(async move {
        let url = format!("{api_url}/api/business");

        let result = Request::get(&url).send().await;
        handle_api_response::<BusinessProfile, F>(result, callback, "business profile").await;
    });
}
