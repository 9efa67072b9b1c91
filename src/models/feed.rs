use serde::{Deserialize, Serialize};

use super::UserProfile;

/// A feed post as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Feed {
    #[serde(rename = "feedId", default)]
    pub feed_id: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(rename = "createdOn", default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(rename = "feedMetaData", default)]
    pub feed_meta_data: Vec<FeedMetadata>,
}

impl Feed {
    /// Number of likes among the attached metadata entries
    pub fn like_count(&self) -> usize {
        self.feed_meta_data.iter().filter(|m| m.is_like).count()
    }

    /// Comments among the attached metadata entries, in backend order
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.feed_meta_data
            .iter()
            .filter_map(|m| m.comment.as_deref())
    }
}

/// A like or comment attached to a feed post. Also serves as the request
/// body for `POST /feeds/meta/{feedId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeedMetadata {
    #[serde(rename = "isLike", default)]
    pub is_like: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

impl FeedMetadata {
    pub fn like() -> Self {
        Self {
            is_like: true,
            comment: None,
        }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            is_like: false,
            comment: Some(text.into()),
        }
    }
}

/// Body for `POST /feeds`.
#[derive(Debug, Clone, Serialize)]
pub struct NewFeed {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// One page of feed posts. The backend wraps results in a Spring-Data style
/// page envelope; only `content` is relied upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeedPage {
    #[serde(default)]
    pub content: Vec<Feed>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<i64>,
    #[serde(rename = "totalElements", default)]
    pub total_elements: Option<i64>,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub last: Option<bool>,
}
