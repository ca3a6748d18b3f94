use crate::record::CommandRecord;
use crate::{CommandFlags, CommandKind};
use pacer_core::{PacerError, PacerResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One issued agent command.
///
/// Only the kind is stored. The per-kind flags are computed from it, so a
/// command always has exactly one flag set and it is the one for its kind.
/// There are no setters: build a new command instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CommandRecord", into = "CommandRecord")]
pub struct Command {
    kind: CommandKind,
}

impl Command {
    pub fn new(kind: CommandKind) -> Self {
        Self { kind }
    }

    /// Build a command from an untrusted tag such as parsed agent input.
    pub fn from_tag(tag: &str) -> PacerResult<Self> {
        tag.parse::<CommandKind>().map(Self::new)
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Stable tag for logs and serialisation; parses back to `kind()`.
    pub fn describe(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn flags(&self) -> CommandFlags {
        CommandFlags::for_kind(self.kind)
    }

    pub fn is(&self, kind: CommandKind) -> bool {
        self.kind == kind
    }

    pub fn is_start(&self) -> bool {
        self.is(CommandKind::Start)
    }

    pub fn is_review(&self) -> bool {
        self.is(CommandKind::Review)
    }

    pub fn is_done(&self) -> bool {
        self.is(CommandKind::Done)
    }

    pub fn is_assign(&self) -> bool {
        self.is(CommandKind::Assign)
    }

    pub fn is_block(&self) -> bool {
        self.is(CommandKind::Block)
    }

    pub fn is_unblock(&self) -> bool {
        self.is(CommandKind::Unblock)
    }

    pub fn is_note(&self) -> bool {
        self.is(CommandKind::Note)
    }

    pub fn is_set_dod(&self) -> bool {
        self.is(CommandKind::SetDod)
    }

    pub fn is_set_field(&self) -> bool {
        self.is(CommandKind::SetField)
    }

    pub fn is_rollback(&self) -> bool {
        self.is(CommandKind::Rollback)
    }
}

impl From<CommandKind> for Command {
    fn from(kind: CommandKind) -> Self {
        Self::new(kind)
    }
}

impl FromStr for Command {
    type Err = PacerError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::from_tag(tag)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
