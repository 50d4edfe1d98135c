// frontend_storefront/src/api/utils.rs
use gloo::console::error;
use gloo::net::http::Response;
use serde::de::DeserializeOwned;

/// Generic API response handler that checks the status and parses JSON
pub async fn handle_api_response<T, F>(
    response_result: Result<Response, gloo::net::Error>,
    callback: Option<F>,
    operation_name: &str,
) -> Option<T>
where
    T: DeserializeOwned + Clone,
    F: FnOnce(Result<T, String>),
{
    match response_result {
        Ok(response) => {
            if !response.ok() {
                let error_msg = format!(
                    "{} request failed with status: {}",
                    operation_name,
                    response.status()
                );
                error!(&error_msg);
                if let Some(cb) = callback {
                    cb(Err(error_msg));
                }
                return None;
            }

            // Parse JSON response
            match response.json::<T>().await {
                Ok(data) => {
                    if let Some(cb) = callback {
                        cb(Ok(data.clone()));
                    }
                    Some(data)
                }
                Err(e) => {
                    let error_msg = format!("Failed to parse {} response: {:?}", operation_name, e);
                    error!(&error_msg);
                    if let Some(cb) = callback {
                        cb(Err("Failed to parse response".to_string()));
                    }
                    None
                }
            }
        }
        Err(e) => {
            let error_msg = format!("{} request failed: {:?}", operation_name, e);
            error!(&error_msg);
            if let Some(cb) = callback {
                cb(Err("Request failed".to_string()));
            }
            None
        }
    }
}
