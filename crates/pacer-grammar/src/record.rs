//! Serialised form of a command: the kind tag plus every flag.
//!
//! ```json
//! {"kind":"block","isStart":false,"isReview":false,"isDone":false,
//!  "isAssign":false,"isBlock":true,"isUnblock":false,"isNote":false,
//!  "isSetDoD":false,"isSetField":false,"isRollback":false}
//! ```

use crate::flags::inconsistent;
use crate::{Command, CommandFlags, CommandKind};
use pacer_core::PacerError;
use serde::{Deserialize, Serialize};

/// Wire shape of a [`Command`]. Every flag key is required and no other
/// key is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordFields", into = "RecordFields")]
pub struct CommandRecord {
    pub kind: String,
    pub flags: CommandFlags,
}

// `flatten` cannot be combined with `deny_unknown_fields`, so the flags are
// spelled out here.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RecordFields {
    kind: String,
    is_start: bool,
    is_review: bool,
    is_done: bool,
    is_assign: bool,
    is_block: bool,
    is_unblock: bool,
    is_note: bool,
    #[serde(rename = "isSetDoD")]
    is_set_dod: bool,
    is_set_field: bool,
    is_rollback: bool,
}

impl From<RecordFields> for CommandRecord {
    fn from(fields: RecordFields) -> Self {
        Self {
            kind: fields.kind,
            flags: CommandFlags {
                is_start: fields.is_start,
                is_review: fields.is_review,
                is_done: fields.is_done,
                is_assign: fields.is_assign,
                is_block: fields.is_block,
                is_unblock: fields.is_unblock,
                is_note: fields.is_note,
                is_set_dod: fields.is_set_dod,
                is_set_field: fields.is_set_field,
                is_rollback: fields.is_rollback,
            },
        }
    }
}

impl From<CommandRecord> for RecordFields {
    fn from(record: CommandRecord) -> Self {
        let flags = record.flags;
        Self {
            kind: record.kind,
            is_start: flags.is_start,
            is_review: flags.is_review,
            is_done: flags.is_done,
            is_assign: flags.is_assign,
            is_block: flags.is_block,
            is_unblock: flags.is_unblock,
            is_note: flags.is_note,
            is_set_dod: flags.is_set_dod,
            is_set_field: flags.is_set_field,
            is_rollback: flags.is_rollback,
        }
    }
}

impl From<Command> for CommandRecord {
    fn from(command: Command) -> Self {
        Self {
            kind: command.describe().to_string(),
            flags: command.flags(),
        }
    }
}

impl TryFrom<CommandRecord> for Command {
    type Error = PacerError;

    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        let kind: CommandKind = record.kind.parse()?;
        let active = record.flags.active();
        if active != [kind] {
            return Err(inconsistent(Some(kind), &active));
        }
        Ok(Command::new(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_keys_match_flag_names() {
        let value = serde_json::to_value(CommandRecord::from(Command::new(CommandKind::Note)))
            .unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 11);
        assert_eq!(object["kind"], json!("note"));
        for kind in CommandKind::ALL {
            assert_eq!(
                object[kind.flag_name()],
                json!(kind == CommandKind::Note),
                "flag {}",
                kind.flag_name()
            );
        }
    }

    #[test]
    fn test_try_from_rejects_unknown_kind() {
        let record = CommandRecord {
            kind: "finish".to_string(),
            flags: CommandFlags::for_kind(CommandKind::Done),
        };
        let err = Command::try_from(record).unwrap_err();
        assert!(err.is_invalid_kind());
    }

    #[test]
    fn test_try_from_rejects_mismatched_flag() {
        let record = CommandRecord {
            kind: "start".to_string(),
            flags: CommandFlags::for_kind(CommandKind::Review),
        };
        match Command::try_from(record).unwrap_err() {
            PacerError::InconsistentFlags { kind, active } => {
                assert_eq!(kind.as_deref(), Some("start"));
                assert_eq!(active, vec!["review".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_try_from_rejects_extra_flag() {
        let mut flags = CommandFlags::for_kind(CommandKind::Start);
        flags.is_done = true;
        let record = CommandRecord {
            kind: "start".to_string(),
            flags,
        };
        assert!(Command::try_from(record).unwrap_err().is_inconsistent_flags());
    }

    #[test]
    fn test_try_from_rejects_no_flags() {
        let record = CommandRecord {
            kind: "assign".to_string(),
            flags: CommandFlags::default(),
        };
        assert!(Command::try_from(record).unwrap_err().is_inconsistent_flags());
    }

    #[test]
    fn test_record_deserialise_rejects_unknown_key() {
        let mut value = serde_json::to_value(CommandRecord::from(Command::new(CommandKind::Note)))
            .unwrap();
        value["isFinish"] = json!(false);

        let err = serde_json::from_value::<CommandRecord>(value).unwrap_err();
        assert!(err.to_string().contains("isFinish"));
    }

    #[test]
    fn test_record_deserialise_round_trip() {
        let record = CommandRecord::from(Command::new(CommandKind::SetField));
        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(serde_json::from_str::<CommandRecord>(&text).unwrap(), record);
    }
}
