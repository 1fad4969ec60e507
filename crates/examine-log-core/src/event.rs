//! Inbound host events

use serde::{Deserialize, Serialize};

/// Menu option text that marks an examine click
pub const EXAMINE_OPTION: &str = "Examine";

/// Menu action kinds reported by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuAction {
    ExamineItemGround,
    ExamineObject,
    ExamineNpc,
    CcOpLowPriority,
    #[serde(other)]
    Other,
}

impl MenuAction {
    /// Whether this action produces an examine text worth matching
    pub fn is_examine(self) -> bool {
        match self {
            MenuAction::ExamineItemGround
            | MenuAction::ExamineObject
            | MenuAction::ExamineNpc
            | MenuAction::CcOpLowPriority => true,
            MenuAction::Other => false,
        }
    }
}

/// An examine click waiting for its chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingToken {
    pub id: i64,
}

/// Events delivered by the host, one at a time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    MenuOptionClicked {
        option: String,
        action: MenuAction,
        id: i64,
    },
    ChatMessage {
        message: String,
    },
    GameStateChanged {
        #[serde(default)]
        state: String,
    },
}

impl HostEvent {
    /// The token this event should enqueue, if any
    pub fn pending_token(&self) -> Option<PendingToken> {
        match self {
            HostEvent::MenuOptionClicked { option, action, id }
                if option == EXAMINE_OPTION && action.is_examine() =>
            {
                Some(PendingToken { id: *id })
            }
            _ => None,
        }
    }
}
