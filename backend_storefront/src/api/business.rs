// backend_storefront/src/api/business.rs
use rocket::serde::{json::Json, Deserialize, Serialize};
use rocket::{get, put, http::Status, State};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "rocket::serde")]
pub struct BusinessProfile {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ProfileResponse {
    pub success: bool,
    pub message: String,
}

/// Stores the profile outside the served site so a site rebuild does not
/// wipe it.
pub struct BusinessStore {
    path: PathBuf,
}

impl BusinessStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join("business.json"),
        }
    }

    pub fn load(&self) -> Option<BusinessProfile> {
        let contents = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    pub fn save(&self, profile: &BusinessProfile) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}

// ------------- GET PROFILE --------------------------------------------------
/// Return the stored business profile
/// ### Examples:
/// - GET /api/business → the profile JSON, or 404 if none was stored yet
#[get("/business")]
pub fn get_business(store: &State<BusinessStore>) -> Result<Json<BusinessProfile>, Status> {
    store.load().map(Json).ok_or(Status::NotFound)
}

// ------------- PUT PROFILE --------------------------------------------------
/// Replace the stored business profile
#[put("/business", format = "json", data = "<profile>")]
pub fn put_business(
    profile: Json<BusinessProfile>,
    store: &State<BusinessStore>,
) -> Json<ProfileResponse> {
    match store.save(&profile) {
        Ok(()) => Json(ProfileResponse {
            success: true,
            message: format!("Profile for '{}' saved", profile.name),
        }),
        Err(e) => Json(ProfileResponse {
            success: false,
            message: format!("Failed to save profile: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;
    use rocket::routes;

    fn client() -> (Client, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let rocket = rocket::build()
            .manage(BusinessStore::new(dir.path()))
            .mount("/api", routes![get_business, put_business]);
        (Client::tracked(rocket).expect("valid rocket"), dir)
    }

    #[test]
    fn get_returns_not_found_before_a_profile_is_stored() {
        let (client, _dir) = client();
        let response = client.get("/api/business").dispatch();
        assert_eq!(response.status(), Status::NotFound);
    }

    #[test]
    fn put_then_get_round_trips_the_profile() {
        let (client, _dir) = client();

        let body = serde_json::json!({
            "name": "Maple & Main",
            "description": "We sell handmade goods.",
            "email": "hello@mapleandmain.example"
        })
        .to_string();

        let response = client
            .put("/api/business")
            .header(ContentType::JSON)
            .body(body)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        let saved: ProfileResponse = response.into_json().expect("response json");
        assert!(saved.success);

        let response = client.get("/api/business").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let profile: BusinessProfile = response.into_json().expect("profile json");
        assert_eq!(profile.name, "Maple & Main");
        assert_eq!(profile.description, "We sell handmade goods.");
        assert_eq!(profile.phone, None);
    }

    #[test]
    fn missing_description_comes_back_as_empty_text() {
        let (client, _dir) = client();

        let body = serde_json::json!({ "name": "No Bio Bakery" }).to_string();
        let response = client
            .put("/api/business")
            .header(ContentType::JSON)
            .body(body)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        let profile: BusinessProfile = client
            .get("/api/business")
            .dispatch()
            .into_json()
            .expect("profile json");
        assert_eq!(profile.description, "");
    }
}
