use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

/// Envelope returned by paginated list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub has_next_page: bool,
}

/// Envelope returned by single-item endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemEnvelope<T> {
    pub data: T,
}

/// Envelope returned by mutation endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MutationEnvelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body returned by the backend on failed requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub message: ErrorMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The backend sends either a single message or a list of message fragments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    /// Collapse the message into a single display string
    pub fn joined(&self) -> String {
        match self {
            ErrorMessage::One(message) => message.clone(),
            ErrorMessage::Many(fragments) => fragments.join(". "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ErrorMessage::One(message) => message.trim().is_empty(),
            ErrorMessage::Many(fragments) => fragments.iter().all(|f| f.trim().is_empty()),
        }
    }
}

// ---------------------------------------------------------------------------
// Babies
// ---------------------------------------------------------------------------

/// A baby profile registered in the family account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Baby {
    pub id: String,
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub birthdate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to register a new baby
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBabyRequest {
    pub name: String,
    pub birthdate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

// ---------------------------------------------------------------------------
// Family members
// ---------------------------------------------------------------------------

/// Role a family member holds within the account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FamilyRole {
    Mother,
    Father,
    Guardian,
    Relative,
}

/// A member of the family account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: FamilyRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub joined_at: DateTime<Utc>,
}

/// Request to invite another caregiver into the family account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InviteMemberRequest {
    pub email: String,
    pub role: FamilyRole,
}

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

/// A badge definition (milestone the baby can earn)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

/// One badge earned by one baby. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BabyBadgeRecord {
    pub id: String,
    pub baby_id: String,
    pub badge_id: String,
    pub completed_at: DateTime<Utc>,
    /// Arbitrary metadata recorded at award time (photo url, note, ...)
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Value>,
    /// Populated badge reference, when the backend expands it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

/// Request to award a badge to a baby
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwardBadgeRequest {
    pub baby_id: String,
    pub badge_id: String,
    /// When the milestone was completed; must not be in the future
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Value>,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// An in-app notification addressed to the current user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Origin of the notification (badge, closet, family, system, ...)
    pub category: String,
    pub is_read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Query parameters for the paginated notification list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub unread_only: Option<bool>,
}

// ---------------------------------------------------------------------------
// Pregnancy care content
// ---------------------------------------------------------------------------

/// A pregnancy-care article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareArticle {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Full article body; omitted in list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Pregnancy week the article targets, if week-scoped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// Query parameters for browsing care articles
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleQuery {
    pub week: Option<u32>,
    pub category_id: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// Kindness closet
// ---------------------------------------------------------------------------

/// Condition of a shared item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ItemCondition {
    New,
    LikeNew,
    Used,
}

/// Lifecycle status of a closet post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PostStatus {
    Available,
    Reserved,
    Given,
}

/// A kindness-closet post offering baby items to other families
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosetPost {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub condition: ItemCondition,
    pub status: PostStatus,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to publish a new closet post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateClosetPostRequest {
    pub title: String,
    pub description: String,
    pub condition: ItemCondition,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Query parameters for the paginated closet feed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosetQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub region: Option<String>,
    pub category_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Taxonomy
// ---------------------------------------------------------------------------

/// A content category (used by care articles and closet posts)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// A free-form content tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
}
