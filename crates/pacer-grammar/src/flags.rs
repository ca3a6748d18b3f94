use crate::CommandKind;
use pacer_core::{PacerError, PacerResult};
use serde::{Deserialize, Serialize};

/// Per-kind boolean view of a command.
///
/// A `Command` never stores these; it builds them from its kind on read.
/// Flags that arrive from outside (a deserialised record, say) go through
/// [`CommandFlags::selected`] before they are trusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandFlags {
    pub is_start: bool,
    pub is_review: bool,
    pub is_done: bool,
    pub is_assign: bool,
    pub is_block: bool,
    pub is_unblock: bool,
    pub is_note: bool,
    #[serde(rename = "isSetDoD")]
    pub is_set_dod: bool,
    pub is_set_field: bool,
    pub is_rollback: bool,
}

impl CommandFlags {
    pub fn for_kind(kind: CommandKind) -> Self {
        let mut flags = Self::default();
        *flags.slot_mut(kind) = true;
        flags
    }

    pub fn is_set(&self, kind: CommandKind) -> bool {
        match kind {
            CommandKind::Start => self.is_start,
            CommandKind::Review => self.is_review,
            CommandKind::Done => self.is_done,
            CommandKind::Assign => self.is_assign,
            CommandKind::Block => self.is_block,
            CommandKind::Unblock => self.is_unblock,
            CommandKind::Note => self.is_note,
            CommandKind::SetDod => self.is_set_dod,
            CommandKind::SetField => self.is_set_field,
            CommandKind::Rollback => self.is_rollback,
        }
    }

    /// Kinds whose flag is set, in declaration order.
    pub fn active(&self) -> Vec<CommandKind> {
        CommandKind::ALL
            .into_iter()
            .filter(|kind| self.is_set(*kind))
            .collect()
    }

    /// The single selected kind. Zero or several set flags is an error.
    pub fn selected(&self) -> PacerResult<CommandKind> {
        match self.active().as_slice() {
            [kind] => Ok(*kind),
            active => Err(inconsistent(None, active)),
        }
    }

    fn slot_mut(&mut self, kind: CommandKind) -> &mut bool {
        match kind {
            CommandKind::Start => &mut self.is_start,
            CommandKind::Review => &mut self.is_review,
            CommandKind::Done => &mut self.is_done,
            CommandKind::Assign => &mut self.is_assign,
            CommandKind::Block => &mut self.is_block,
            CommandKind::Unblock => &mut self.is_unblock,
            CommandKind::Note => &mut self.is_note,
            CommandKind::SetDod => &mut self.is_set_dod,
            CommandKind::SetField => &mut self.is_set_field,
            CommandKind::Rollback => &mut self.is_rollback,
        }
    }
}

pub(crate) fn inconsistent(kind: Option<CommandKind>, active: &[CommandKind]) -> PacerError {
    tracing::debug!(
        "Rejected command flags: kind {:?}, active {:?}",
        kind,
        active
    );
    PacerError::InconsistentFlags {
        kind: kind.map(|k| k.as_str().to_string()),
        active: active.iter().map(|k| k.as_str().to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_kind_sets_exactly_one_flag() {
        for kind in CommandKind::ALL {
            let flags = CommandFlags::for_kind(kind);
            assert_eq!(flags.active(), vec![kind]);
            for other in CommandKind::ALL {
                assert_eq!(flags.is_set(other), other == kind);
            }
        }
    }

    #[test]
    fn test_for_kind_field_mapping() {
        assert!(CommandFlags::for_kind(CommandKind::SetDod).is_set_dod);
        assert!(CommandFlags::for_kind(CommandKind::SetField).is_set_field);
        assert!(CommandFlags::for_kind(CommandKind::Unblock).is_unblock);
        assert!(!CommandFlags::for_kind(CommandKind::Unblock).is_block);
    }

    #[test]
    fn test_selected_single_flag() {
        let flags = CommandFlags {
            is_rollback: true,
            ..Default::default()
        };
        assert_eq!(flags.selected().unwrap(), CommandKind::Rollback);
    }

    #[test]
    fn test_selected_rejects_no_flags() {
        let err = CommandFlags::default().selected().unwrap_err();
        match err {
            PacerError::InconsistentFlags { kind, active } => {
                assert_eq!(kind, None);
                assert!(active.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_selected_rejects_multiple_flags() {
        let flags = CommandFlags {
            is_start: true,
            is_review: true,
            ..Default::default()
        };
        match flags.selected().unwrap_err() {
            PacerError::InconsistentFlags { active, .. } => {
                assert_eq!(active, vec!["start".to_string(), "review".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
