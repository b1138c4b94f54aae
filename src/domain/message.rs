use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MessageId, MessageRole, TurnId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: MessageRole,
    pub text: String,
    #[serde(rename = "ts", with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(turn: TurnId, role: MessageRole, text: String) -> Self {
        Self {
            id: MessageId::for_role(turn, role),
            role,
            text,
            timestamp: Utc::now(),
        }
    }

    pub fn user(turn: TurnId, text: String) -> Self {
        Self::new(turn, MessageRole::User, text)
    }

    pub fn assistant(turn: TurnId, text: String) -> Self {
        Self::new(turn, MessageRole::Assistant, text)
    }
}

/// `ts` is written as RFC 3339 UTC with millisecond precision.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
