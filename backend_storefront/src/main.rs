// backend_storefront/src/main.rs
#[macro_use] extern crate rocket;

mod api;

use rocket::{fs::FileServer, http::Method};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::{fs, path::Path};
use serde::Serialize;

use crate::api::business::BusinessStore;

#[derive(Serialize)]
struct FrontendConfig {
    api_url: String,
}

fn write_frontend_config(site_dir: &Path, api_url: &str) -> std::io::Result<()> {
    let config_dir = site_dir.join("config");
    fs::create_dir_all(&config_dir)?;
    let config = FrontendConfig {
        api_url: api_url.to_string(),
    };
    let json = serde_json::to_string_pretty(&config).unwrap();
    fs::write(config_dir.join("config.json"), json)?;
    Ok(())
}

#[launch]
async fn rocket() -> _ {
    let api_url = std::env::var("API_URL").expect("Please set API_URL to something like \"https://api.example.com\"");
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "/app/data".to_string());
    let site_dir = std::env::var("SITE_DIR").unwrap_or_else(|_| "/app/site".to_string());

    write_frontend_config(Path::new(&site_dir), &api_url).expect("Failed to write frontend config");

    let allowed_origins = AllowedOrigins::some_exact(&[
        // local SPA on port 80
        "http://127.0.0.1",
        "http://localhost",
        // local testing
        "http://127.0.0.1:8080",
        "http://localhost:8080",
        "http://127.0.0.1:8000",
        "http://localhost:8000",
        // production
        api_url.as_str(),
    ]);

    let cors = CorsOptions {
        allowed_origins,
        allowed_methods: vec![Method::Get, Method::Put, Method::Options]
            .into_iter()
            .map(From::from)
            .collect(),
        allowed_headers: AllowedHeaders::some(&["Content-Type"]),
        allow_credentials: false,
        ..Default::default()
    }
    .to_cors()
    .expect("Error configuring CORS");

    rocket::build()
        .attach(cors)
        .manage(BusinessStore::new(data_dir))
        .mount("/api", routes![
            api::get_business,
            api::put_business
        ])
        // The built frontend is always available under /
        .mount("/", FileServer::from(site_dir))
}
