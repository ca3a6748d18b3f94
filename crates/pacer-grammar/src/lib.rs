pub mod command;
pub mod flags;
pub mod kind;
pub mod record;

pub use command::Command;
pub use flags::CommandFlags;
pub use kind::CommandKind;
pub use record::CommandRecord;
