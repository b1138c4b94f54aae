use std::fmt;

use serde::{Deserialize, Serialize};

use super::{MessageRole, TurnId};

const LOCAL_ERROR_SUFFIX: &str = "_err";

/// Wire identifier of a message, `<turn millis><suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn for_role(turn: TurnId, role: MessageRole) -> Self {
        Self(format!("{}{}", turn, role.id_suffix()))
    }

    /// Id of a message synthesized by the client when the relay is unreachable.
    pub fn local_error(turn: TurnId) -> Self {
        Self(format!("{}{}", turn, LOCAL_ERROR_SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The turn id prefix, if the id has the `<millis>_<suffix>` shape.
    pub fn turn(&self) -> Option<TurnId> {
        let (millis, _) = self.0.split_once('_')?;
        millis.parse().ok().map(TurnId::from_millis)
    }

    pub fn suffix(&self) -> Option<&str> {
        self.0.find('_').map(|idx| &self.0[idx..])
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
