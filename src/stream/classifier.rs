//! Frame classification.
//!
//! Discriminates one generic-JSON-decoded frame into exactly one [`Kind`]
//! by first-match priority over a fixed, ordered predicate list. The order
//! is load-bearing: nested, specific keys are checked ahead of broader
//! fallbacks, and the kinds are assumed mutually exclusive by top-level key.
//! If a frame ever carried the keys of two kinds, the higher-priority kind
//! silently wins; this matches the vendor's documented behavior and is
//! preserved as-is.

use serde_json::Value;

use crate::stream::types::{
    DirectMessageNotice, EventNotice, ForUserMessage, FriendsLists, LimitNotice,
    LocationDeletionNotice, Payload, StatusWithheldNotice, Tweet, TweetDeletionNotice,
    UserWithheldNotice, WarningNotice,
};
use crate::stream::FrameError;

/// The closed set of message categories a frame can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Site-stream control message. Acknowledged and dropped; the payload is
    /// never decoded.
    Control,
    Warning,
    Delete,
    ScrubGeo,
    Limit,
    DirectMessage,
    StatusWithheld,
    UserWithheld,
    Event,
    Friends,
    Tweet,
    ForUser,
    /// No predicate matched. Dropped without error.
    Unknown,
}

impl Kind {
    /// Stable lowercase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Control => "control",
            Kind::Warning => "warning",
            Kind::Delete => "delete",
            Kind::ScrubGeo => "scrub_geo",
            Kind::Limit => "limit",
            Kind::DirectMessage => "direct_message",
            Kind::StatusWithheld => "status_withheld",
            Kind::UserWithheld => "user_withheld",
            Kind::Event => "event",
            Kind::Friends => "friends",
            Kind::Tweet => "tweet",
            Kind::ForUser => "for_user",
            Kind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify one decoded frame.
///
/// The predicate order below must not be reshuffled.
pub fn classify(frame: &Value) -> Kind {
    if frame.get("control").is_some() {
        return Kind::Control;
    }
    if frame.get("warning").is_some() {
        return Kind::Warning;
    }
    if let Some(delete) = frame.get("delete") {
        if delete.get("status").is_some() {
            return Kind::Delete;
        }
    }
    if let Some(scrub_geo) = frame.get("scrub_geo") {
        if scrub_geo.get("up_to_status_id").is_some() {
            return Kind::ScrubGeo;
        }
    }
    if frame.get("limit").is_some() {
        return Kind::Limit;
    }
    if frame.get("direct_message").is_some() {
        return Kind::DirectMessage;
    }
    if frame.get("status_withheld").is_some() {
        return Kind::StatusWithheld;
    }
    if frame.get("user_withheld").is_some() {
        return Kind::UserWithheld;
    }
    if frame.get("event").is_some() {
        return Kind::Event;
    }
    if frame.get("friends").is_some() {
        return Kind::Friends;
    }
    if frame.get("text").is_some() && frame.get("user").is_some() {
        return Kind::Tweet;
    }
    if frame.get("for_user").is_some() {
        return Kind::ForUser;
    }
    Kind::Unknown
}

/// Re-decode a raw frame into the typed payload for its kind.
///
/// `Control` and `Unknown` frames are dropped before this point and have no
/// payload; calling with either is a caller bug and reports as a schema
/// failure on an empty document.
pub fn decode_payload(kind: Kind, raw: &[u8]) -> Result<Payload, FrameError> {
    fn decode<T: serde::de::DeserializeOwned>(kind: Kind, raw: &[u8]) -> Result<T, FrameError> {
        serde_json::from_slice(raw).map_err(|source| FrameError::SchemaDecode { kind, source })
    }

    let payload = match kind {
        Kind::Warning => Payload::Warning(decode::<WarningNotice>(kind, raw)?),
        Kind::Delete => Payload::Delete(decode::<TweetDeletionNotice>(kind, raw)?),
        Kind::ScrubGeo => Payload::ScrubGeo(decode::<LocationDeletionNotice>(kind, raw)?),
        Kind::Limit => Payload::Limit(decode::<LimitNotice>(kind, raw)?),
        Kind::DirectMessage => {
            Payload::DirectMessage(Box::new(decode::<DirectMessageNotice>(kind, raw)?))
        }
        Kind::StatusWithheld => Payload::StatusWithheld(decode::<StatusWithheldNotice>(kind, raw)?),
        Kind::UserWithheld => Payload::UserWithheld(decode::<UserWithheldNotice>(kind, raw)?),
        Kind::Event => Payload::Event(Box::new(decode::<EventNotice>(kind, raw)?)),
        Kind::Friends => Payload::Friends(decode::<FriendsLists>(kind, raw)?),
        Kind::Tweet => Payload::Tweet(Box::new(decode::<Tweet>(kind, raw)?)),
        Kind::ForUser => Payload::ForUser(Box::new(decode::<ForUserMessage>(kind, raw)?)),
        Kind::Control | Kind::Unknown => {
            return Err(FrameError::SchemaDecode {
                kind,
                source: <serde_json::Error as serde::de::Error>::custom(
                    "kind carries no payload",
                ),
            })
        }
    };
    Ok(payload)
}
