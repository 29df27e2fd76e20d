//! Structured church facts used to ground generated and fallback answers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Church name used when no knowledge record names one.
pub const DEFAULT_CHURCH_NAME: &str = "Living Hope Church";

/// Knowledge record loaded from `church-info.json`.
///
/// Every field is optional in the source document so that partially filled
/// content files still deserialize; empty collections simply drop out of the
/// composed prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChurchKnowledge {
    pub church_name: String,
    pub denomination: String,
    pub founded: String,
    pub pastor_message: String,
    pub church_history: String,
    pub pastoral_care: String,
    pub small_groups: String,
    pub ministries: Vec<Ministry>,
    pub community_involvement: Vec<CommunityProgram>,
    pub frequently_asked_questions: Vec<FaqEntry>,
    pub detailed_beliefs: BTreeMap<String, Belief>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ministry {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityProgram {
    pub program: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Belief {
    pub title: String,
    pub content: String,
}

impl ChurchKnowledge {
    /// Record substituted when `church-info.json` cannot be loaded.
    pub fn fallback_record() -> Self {
        Self {
            church_name: DEFAULT_CHURCH_NAME.to_string(),
            denomination: "Independent Christian Church".to_string(),
            founded: "2010".to_string(),
            pastor_message: "Welcome to our church family!".to_string(),
            church_history: "Our church has a rich history of serving the community.".to_string(),
            pastoral_care: "We provide caring support to our members.".to_string(),
            small_groups: "Small groups are an important part of our community.".to_string(),
            ministries: Vec::new(),
            community_involvement: Vec::new(),
            frequently_asked_questions: Vec::new(),
            detailed_beliefs: BTreeMap::new(),
        }
    }

    /// Name to present the assistant under.
    pub fn display_name(&self) -> &str {
        let name = self.church_name.trim();
        if name.is_empty() { DEFAULT_CHURCH_NAME } else { name }
    }
}
