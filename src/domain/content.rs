//! Page content records and the defaults used when they cannot be loaded.

use serde::{Deserialize, Serialize};

use crate::domain::ChurchKnowledge;
use crate::ports::ContentProvider;

pub const ABOUT_FILE: &str = "about.json";
pub const CONTACT_FILE: &str = "contact.json";
pub const CHURCH_INFO_FILE: &str = "church-info.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub hero: Hero,
    pub story: Section,
    pub mission: Section,
    pub vision: Section,
    #[serde(default)]
    pub values: Vec<CoreValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub address: Address,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub service_time: ServiceTimes,
    pub social_media: SocialMedia,
    pub office_hours: OfficeHours,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTimes {
    pub sunday: SundayServices,
    pub wednesday: WednesdayServices,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SundayServices {
    pub morning: String,
    pub evening: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WednesdayServices {
    pub prayer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub youtube: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeHours {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            hero: Hero {
                title: "Welcome to Living Hope Church".to_string(),
                subtitle: "A community of faith, hope, and love".to_string(),
                description: "Join us in our journey of faith and community.".to_string(),
            },
            story: Section {
                title: "Our Story".to_string(),
                content: "We are a welcoming church community.".to_string(),
            },
            mission: Section {
                title: "Our Mission".to_string(),
                content: "To share God's love with our community.".to_string(),
            },
            vision: Section {
                title: "Our Vision".to_string(),
                content: "A community transformed by faith.".to_string(),
            },
            values: Vec::new(),
        }
    }
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            address: Address {
                street: "123 Hope Street".to_string(),
                city: "Springfield".to_string(),
                state: "State".to_string(),
                zip_code: "12345".to_string(),
                full: "123 Hope Street, Springfield, State 12345".to_string(),
            },
            phone: "(555) 123-HOPE".to_string(),
            email: "info@livinghopechurch.org".to_string(),
            website: "www.livinghopechurch.org".to_string(),
            service_time: ServiceTimes {
                sunday: SundayServices {
                    morning: "10:00 AM".to_string(),
                    evening: "6:00 PM".to_string(),
                },
                wednesday: WednesdayServices { prayer: "7:00 PM".to_string() },
            },
            social_media: SocialMedia {
                facebook: "facebook.com/livinghopechurch".to_string(),
                instagram: "@livinghopechurch".to_string(),
                youtube: "youtube.com/livinghopechurch".to_string(),
            },
            office_hours: OfficeHours {
                weekdays: "9:00 AM - 5:00 PM".to_string(),
                saturday: "By Appointment".to_string(),
                sunday: "Closed".to_string(),
            },
        }
    }
}

/// Load the About record, substituting the default on any failure.
pub fn load_about_or_default(provider: &(impl ContentProvider + ?Sized)) -> AboutContent {
    provider.about().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Using default about content");
        AboutContent::default()
    })
}

/// Load the Contact record, substituting the default on any failure.
pub fn load_contact_or_default(provider: &(impl ContentProvider + ?Sized)) -> ContactContent {
    provider.contact().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Using default contact content");
        ContactContent::default()
    })
}

/// Load the knowledge record, substituting the default on any failure.
pub fn load_knowledge_or_default(provider: &(impl ContentProvider + ?Sized)) -> ChurchKnowledge {
    provider.church_info().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Using default church knowledge");
        ChurchKnowledge::fallback_record()
    })
}
