//! Generic REST client. Every collection the backend exposes is a [`Resource`]
//! value; screens call the same list/get/create/update/delete operations
//! regardless of which collection they sit on. No auth header is attached —
//! the backend does not expect one (see DESIGN.md).

use gloo::console::error;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

use crate::api::error::ApiError;
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    path: &'static str,
}

// Wire paths match the backend's routing verbatim, casing included.
pub const BLOGS: Resource = Resource::new("blogs");
pub const JOBS: Resource = Resource::new("jobs");
pub const APPLICATIONS: Resource = Resource::new("applications");
pub const ADMINS: Resource = Resource::new("admin");
pub const CLIENT_TESTIMONIALS: Resource = Resource::new("Client-Testimonials");
pub const TEAM_TESTIMONIALS: Resource = Resource::new("Team-Testimonials");
pub const TEAM_MEMBERS: Resource = Resource::new("OurTeam");
pub const CAREER_TEAM_MEMBERS: Resource = Resource::new("OurTeamCareer");
pub const PARTNERS: Resource = Resource::new("Partners");
pub const CONTACTS: Resource = Resource::new("contact");

impl Resource {
    const fn new(path: &'static str) -> Self {
        Self { path }
    }

    pub fn collection_url(&self) -> String {
        self.collection_url_at(&config::api_base())
    }

    pub fn item_url(&self, id: u32) -> String {
        self.item_url_at(&config::api_base(), id)
    }

    fn collection_url_at(&self, base: &str) -> String {
        format!("{}/api/{}/", base, self.path)
    }

    fn item_url_at(&self, base: &str, id: u32) -> String {
        format!("{}/api/{}/{}/", base, self.path, id)
    }

    pub async fn list<T: DeserializeOwned>(&self) -> Result<Vec<T>, ApiError> {
        interpret(Request::get(&self.collection_url()).send().await).await
    }

    /// Row count for the dashboard; the API has no dedicated count endpoint,
    /// so this fetches the collection and measures it.
    pub async fn count(&self) -> Result<usize, ApiError> {
        self.list::<serde_json::Value>().await.map(|rows| rows.len())
    }

    pub async fn get<T: DeserializeOwned>(&self, id: u32) -> Result<T, ApiError> {
        interpret(Request::get(&self.item_url(id)).send().await).await
    }

    pub async fn create<B, T>(&self, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = Request::post(&self.collection_url())
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::encode(&e))?;
        interpret(request.send().await).await
    }

    pub async fn create_form<T: DeserializeOwned>(
        &self,
        fields: FormFields,
    ) -> Result<T, ApiError> {
        let request = Request::post(&self.collection_url())
            .body(fields.into_inner())
            .map_err(|e| ApiError::encode(&e))?;
        interpret(request.send().await).await
    }

    pub async fn update<B, T>(&self, id: u32, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = Request::put(&self.item_url(id))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::encode(&e))?;
        interpret(request.send().await).await
    }

    pub async fn update_form<T: DeserializeOwned>(
        &self,
        id: u32,
        fields: FormFields,
    ) -> Result<T, ApiError> {
        let request = Request::put(&self.item_url(id))
            .body(fields.into_inner())
            .map_err(|e| ApiError::encode(&e))?;
        interpret(request.send().await).await
    }

    pub async fn delete(&self, id: u32) -> Result<(), ApiError> {
        let url = self.item_url(id);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| logged(&url, ApiError::network(&e)))?;
        if response.ok() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(logged(&url, ApiError::server(response.status(), &body)))
        }
    }
}

/// The single place a raw HTTP outcome becomes either typed data or a
/// normalized [`ApiError`].
async fn interpret<T: DeserializeOwned>(
    sent: Result<Response, gloo::net::Error>,
) -> Result<T, ApiError> {
    let response = sent.map_err(|e| logged("request", ApiError::network(&e)))?;
    let url = response.url();
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(logged(&url, ApiError::server(response.status(), &body)));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| logged(&url, ApiError::decode(&e)))
}

fn logged(context: &str, e: ApiError) -> ApiError {
    error!(format!("API call failed ({context}): {e}"));
    e
}

/// Multipart body builder: text fields plus optional binary uploads, the shape
/// the backend expects for image- and resume-bearing resources.
pub struct FormFields {
    inner: FormData,
}

impl FormFields {
    pub fn new() -> Self {
        Self {
            inner: FormData::new().expect("FormData is constructible in the browser"),
        }
    }

    pub fn text(self, name: &str, value: &str) -> Self {
        self.inner
            .append_with_str(name, value)
            .expect("failed to append form field");
        self
    }

    pub fn file(self, name: &str, file: &File) -> Self {
        self.inner
            .append_with_blob_and_filename(name, file, &file.name())
            .expect("failed to append form file");
        self
    }

    /// Appends the file only when one was chosen; resources with optional
    /// images submit fine without the field.
    pub fn maybe_file(self, name: &str, file: Option<&File>) -> Self {
        match file {
            Some(file) => self.file(name, file),
            None => self,
        }
    }

    fn into_inner(self) -> FormData {
        self.inner
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.test";

    #[test]
    fn urls_follow_rest_conventions() {
        assert_eq!(
            BLOGS.collection_url_at(BASE),
            "https://example.test/api/blogs/"
        );
        assert_eq!(JOBS.item_url_at(BASE, 12), "https://example.test/api/jobs/12/");
    }

    #[test]
    fn wire_paths_keep_backend_casing() {
        assert_eq!(
            CLIENT_TESTIMONIALS.collection_url_at(BASE),
            "https://example.test/api/Client-Testimonials/"
        );
        assert_eq!(
            TEAM_MEMBERS.collection_url_at(BASE),
            "https://example.test/api/OurTeam/"
        );
        assert_eq!(
            CAREER_TEAM_MEMBERS.collection_url_at(BASE),
            "https://example.test/api/OurTeamCareer/"
        );
        assert_eq!(
            PARTNERS.item_url_at(BASE, 3),
            "https://example.test/api/Partners/3/"
        );
        assert_eq!(
            ADMINS.collection_url_at(BASE),
            "https://example.test/api/admin/"
        );
    }
}
