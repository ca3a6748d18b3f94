use pacer_core::PacerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of actions an agent can record against a task.
///
/// Each variant serialises as its lowercase tag (`"start"`, `"setdod"`, ...).
/// Tags are matched exactly: there are no aliases and no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Start,
    Review,
    Done,
    Assign,
    Block,
    Unblock,
    Note,
    SetDod,
    SetField,
    Rollback,
}

impl CommandKind {
    pub const ALL: [CommandKind; 10] = [
        CommandKind::Start,
        CommandKind::Review,
        CommandKind::Done,
        CommandKind::Assign,
        CommandKind::Block,
        CommandKind::Unblock,
        CommandKind::Note,
        CommandKind::SetDod,
        CommandKind::SetField,
        CommandKind::Rollback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Review => "review",
            Self::Done => "done",
            Self::Assign => "assign",
            Self::Block => "block",
            Self::Unblock => "unblock",
            Self::Note => "note",
            Self::SetDod => "setdod",
            Self::SetField => "setfield",
            Self::Rollback => "rollback",
        }
    }

    /// Key of the matching flag in a serialised command record.
    pub fn flag_name(self) -> &'static str {
        match self {
            Self::Start => "isStart",
            Self::Review => "isReview",
            Self::Done => "isDone",
            Self::Assign => "isAssign",
            Self::Block => "isBlock",
            Self::Unblock => "isUnblock",
            Self::Note => "isNote",
            Self::SetDod => "isSetDoD",
            Self::SetField => "isSetField",
            Self::Rollback => "isRollback",
        }
    }

    /// One-line description for help text and log output.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Start => "Start work on a task",
            Self::Review => "Request review of a task",
            Self::Done => "Mark a task as complete",
            Self::Assign => "Assign an owner to a task",
            Self::Block => "Mark a task as blocked",
            Self::Unblock => "Clear a task's blocked state",
            Self::Note => "Attach a note to a task",
            Self::SetDod => "Set a task's definition of done",
            Self::SetField => "Set an arbitrary field on a task",
            Self::Rollback => "Roll a task back to an earlier state",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandKind {
    type Err = PacerError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match Self::ALL.into_iter().find(|kind| kind.as_str() == tag) {
            Some(kind) => Ok(kind),
            None => {
                tracing::debug!("Rejected command tag: {:?}", tag);
                Err(PacerError::invalid_kind(tag))
            }
        }
    }
}
