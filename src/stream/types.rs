//! Typed payload schemas for each message kind, plus the envelope handed to
//! handlers.
//!
//! Field sets follow the vendor's v1.1 streaming payloads. Every struct
//! tolerates missing fields (`serde(default)`) because the vendor omits
//! empty values; nested objects are `Option` for the same reason.

use bytes::Bytes;
use serde::Deserialize;

use crate::stream::classifier::Kind;

/// A status update.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Tweet {
    pub id: i64,
    pub id_str: String,
    pub text: String,
    pub created_at: String,
    pub source: String,
    pub lang: String,
    pub truncated: bool,
    pub favorite_count: i64,
    pub favorited: bool,
    pub retweet_count: i64,
    pub retweeted: bool,
    pub possibly_sensitive: bool,
    pub filter_level: String,
    pub in_reply_to_status_id: Option<i64>,
    pub in_reply_to_user_id: Option<i64>,
    pub in_reply_to_screen_name: Option<String>,
    pub user: Option<User>,
    pub coordinates: Option<Coordinates>,
    pub entities: Option<Entities>,
    pub withheld_in_countries: Vec<String>,
}

/// The author of a status update.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub id_str: String,
    pub name: String,
    pub screen_name: String,
    pub description: String,
    pub location: String,
    pub url: Option<String>,
    pub lang: String,
    pub protected: bool,
    pub verified: bool,
    pub followers_count: i64,
    pub friends_count: i64,
    pub statuses_count: i64,
    pub favourites_count: i64,
    pub listed_count: i64,
    pub created_at: String,
    pub time_zone: Option<String>,
    pub utc_offset: Option<i64>,
    pub geo_enabled: bool,
}

/// Point geometry attached to a tweet.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Coordinates {
    pub coordinates: [f64; 2],
    #[serde(rename = "type")]
    pub kind: String,
}

/// Hashtags, URLs, and mentions extracted from the text.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Entities {
    pub hashtags: Vec<HashtagEntity>,
    pub urls: Vec<UrlEntity>,
    pub user_mentions: Vec<UserMentionEntity>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HashtagEntity {
    pub text: String,
    pub indices: [i64; 2],
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UrlEntity {
    pub url: String,
    pub display_url: String,
    pub expanded_url: String,
    pub indices: [i64; 2],
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UserMentionEntity {
    pub id: i64,
    pub id_str: String,
    pub name: String,
    pub screen_name: String,
    pub indices: [i64; 2],
}

/// Stall warning wrapper: `{"warning": {...}}`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct WarningNotice {
    pub warning: Option<Warning>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Warning {
    pub code: String,
    pub message: String,
    pub percent_full: f64,
}

/// Status deletion wrapper: `{"delete": {"status": {...}}}`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TweetDeletionNotice {
    pub delete: Option<TweetDeletion>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TweetDeletion {
    pub status: Option<DeletedStatus>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DeletedStatus {
    pub id: i64,
    pub id_str: String,
    pub user_id: i64,
    pub user_id_str: String,
}

/// Geolocation scrub wrapper: `{"scrub_geo": {...}}`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LocationDeletionNotice {
    pub scrub_geo: Option<ScrubGeo>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ScrubGeo {
    pub user_id: i64,
    pub user_id_str: String,
    pub up_to_status_id: i64,
    pub up_to_status_id_str: String,
}

/// Track limit wrapper: `{"limit": {"track": n}}`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LimitNotice {
    pub limit: Option<Limit>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Limit {
    pub track: i64,
}

/// Direct message wrapper: `{"direct_message": {...}}`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DirectMessageNotice {
    pub direct_message: Option<DirectMessage>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DirectMessage {
    pub id: i64,
    pub id_str: String,
    pub text: String,
    pub created_at: String,
    pub sender_id: i64,
    pub sender_screen_name: String,
    pub recipient_id: i64,
    pub recipient_screen_name: String,
    pub sender: Option<User>,
    pub recipient: Option<User>,
    pub entities: Option<Entities>,
}

/// Withheld status wrapper: `{"status_withheld": {...}}`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StatusWithheldNotice {
    pub status_withheld: Option<StatusWithheld>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StatusWithheld {
    pub id: i64,
    pub user_id: i64,
    pub withheld_in_countries: Vec<String>,
}

/// Withheld user wrapper: `{"user_withheld": {...}}`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UserWithheldNotice {
    pub user_withheld: Option<UserWithheld>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UserWithheld {
    pub id: i64,
    pub withheld_in_countries: Vec<String>,
}

/// User-stream event: `{"event": "...", "source": ..., "target": ...}`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EventNotice {
    pub event: String,
    pub created_at: String,
    pub source: Option<User>,
    pub target: Option<User>,
    pub target_object: Option<serde_json::Value>,
}

/// Friends preamble on user/site streams: `{"friends": [...]}`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FriendsLists {
    pub friends: Vec<i64>,
}

/// Site-stream wrapper addressing a message to one user.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ForUserMessage {
    pub for_user: String,
    pub message: Option<serde_json::Value>,
}

/// The one decoded payload of an envelope.
///
/// A tagged union rather than a struct of optionals: exactly one payload per
/// frame is enforced by construction.
#[derive(Debug, Clone)]
pub enum Payload {
    Tweet(Box<Tweet>),
    Warning(WarningNotice),
    Delete(TweetDeletionNotice),
    ScrubGeo(LocationDeletionNotice),
    Limit(LimitNotice),
    DirectMessage(Box<DirectMessageNotice>),
    StatusWithheld(StatusWithheldNotice),
    UserWithheld(UserWithheldNotice),
    Event(Box<EventNotice>),
    Friends(FriendsLists),
    ForUser(Box<ForUserMessage>),
}

impl Payload {
    /// The kind this payload decodes for.
    pub fn kind(&self) -> Kind {
        match self {
            Payload::Tweet(_) => Kind::Tweet,
            Payload::Warning(_) => Kind::Warning,
            Payload::Delete(_) => Kind::Delete,
            Payload::ScrubGeo(_) => Kind::ScrubGeo,
            Payload::Limit(_) => Kind::Limit,
            Payload::DirectMessage(_) => Kind::DirectMessage,
            Payload::StatusWithheld(_) => Kind::StatusWithheld,
            Payload::UserWithheld(_) => Kind::UserWithheld,
            Payload::Event(_) => Kind::Event,
            Payload::Friends(_) => Kind::Friends,
            Payload::ForUser(_) => Kind::ForUser,
        }
    }
}

/// One classified, decoded frame, handed to a handler.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// The frame exactly as it arrived, whitespace-trimmed.
    pub raw: Bytes,

    /// The classifier's verdict.
    pub kind: Kind,

    /// The typed payload matching `kind`.
    pub payload: Payload,
}

impl Envelope {
    /// Assemble an envelope. The payload variant must match `kind`.
    pub fn new(raw: Bytes, kind: Kind, payload: Payload) -> Self {
        debug_assert_eq!(payload.kind(), kind);
        Self { raw, kind, payload }
    }
}
