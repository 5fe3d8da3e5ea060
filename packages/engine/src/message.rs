//! Compose-session message kinds

use serde::{Deserialize, Serialize};

/// Kind of compose session the pipeline runs for. Attribution
/// customization only applies to replies and forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    New,
    Reply,
    ReplyAll,
    Forward,
}

impl MessageKind {
    pub fn is_reply(self) -> bool {
        matches!(self, MessageKind::Reply | MessageKind::ReplyAll)
    }

    pub fn is_forward(self) -> bool {
        matches!(self, MessageKind::Forward)
    }
}
