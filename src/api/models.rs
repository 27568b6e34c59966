//! Record types mirrored from the REST API. Field names (and their occasional
//! odd casing) match the wire format exactly; the structs add no behavior
//! beyond what the backend stores.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Rows that carry the backend's numeric identifier. Lets generic list/delete
/// helpers work across every collection.
pub trait Keyed {
    fn key(&self) -> u32;
}

macro_rules! keyed {
    ($($ty:ty),+ $(,)?) => {
        $(impl Keyed for $ty {
            fn key(&self) -> u32 {
                self.id
            }
        })+
    };
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image: Option<String>,
    pub youtube_url: Option<String>,
    pub date_posted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobListing {
    pub id: u32,
    pub job_title: String,
    pub department: String,
    pub location: String,
    pub job_type: String,
    pub salary_range: String,
    pub job_description: String,
    pub requirements_qualifications: String,
}

/// Create/update payload for a job listing; jobs carry no file so they travel
/// as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPayload {
    pub job_title: String,
    pub department: String,
    pub location: String,
    pub job_type: String,
    pub salary_range: String,
    pub job_description: String,
    pub requirements_qualifications: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobApplication {
    pub id: u32,
    /// Id of the job the application targets.
    pub job: u32,
    pub name: String,
    pub email: String,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientTestimonial {
    pub id: u32,
    pub author: String,
    pub position: String,
    #[serde(deserialize_with = "stars_from_value")]
    pub stars: u8,
    #[serde(rename = "Content")]
    pub content: String,
}

/// The backend expects `stars` as a string on write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientTestimonialPayload {
    pub author: String,
    pub position: String,
    pub stars: String,
    #[serde(rename = "Content")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamTestimonial {
    pub id: u32,
    pub name: String,
    pub position: String,
    #[serde(rename = "Content")]
    pub content: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Partner {
    pub id: u32,
    pub company: String,
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminAccount {
    pub id: u32,
    pub email: String,
    /// Bcrypt hash, not a plaintext password.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactMessage {
    pub id: u32,
    pub fullname: String,
    pub email: String,
    pub company: Option<String>,
    pub domain: Option<String>,
    pub technologies: Option<String>,
    pub address: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPayload {
    pub fullname: String,
    pub email: String,
    pub address: String,
    pub company: String,
    pub domain: String,
    pub technologies: String,
    pub message: String,
}

keyed!(
    BlogPost,
    JobListing,
    JobApplication,
    ClientTestimonial,
    TeamTestimonial,
    TeamMember,
    Partner,
    AdminAccount,
    ContactMessage,
);

/// The backend stores star ratings as strings but older rows hold numbers;
/// accept both and clamp to the 0..=5 range.
fn stars_from_value<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let stars = match &value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    };
    Ok(stars.min(5) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_accept_string_and_number() {
        let from_string: ClientTestimonial = serde_json::from_str(
            r#"{"id": 1, "author": "A", "position": "CTO", "stars": "4", "Content": "great"}"#,
        )
        .unwrap();
        assert_eq!(from_string.stars, 4);

        let from_number: ClientTestimonial = serde_json::from_str(
            r#"{"id": 2, "author": "B", "position": "CEO", "stars": 5, "Content": "ok"}"#,
        )
        .unwrap();
        assert_eq!(from_number.stars, 5);
    }

    #[test]
    fn stars_clamp_garbage_to_range() {
        let odd: ClientTestimonial = serde_json::from_str(
            r#"{"id": 3, "author": "C", "position": "VP", "stars": "eleven", "Content": "?"}"#,
        )
        .unwrap();
        assert_eq!(odd.stars, 0);

        let high: ClientTestimonial = serde_json::from_str(
            r#"{"id": 4, "author": "D", "position": "VP", "stars": 9, "Content": "!"}"#,
        )
        .unwrap();
        assert_eq!(high.stars, 5);
    }

    #[test]
    fn optional_fields_tolerate_missing_values() {
        let post: BlogPost = serde_json::from_str(
            r#"{"id": 7, "title": "t", "summary": "s", "content": "c"}"#,
        )
        .unwrap();
        assert_eq!(post.image, None);
        assert_eq!(post.youtube_url, None);
    }

    #[test]
    fn testimonial_payload_uses_wire_casing() {
        let payload = ClientTestimonialPayload {
            author: "A".into(),
            position: "CTO".into(),
            stars: "5".into(),
            content: "words".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("Content").is_some());
        assert!(json.get("content").is_none());
    }
}
