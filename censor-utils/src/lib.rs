/// Reply text builders shared by commands and the message filter.
pub mod formatting;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Pure parser helpers.
pub mod parse;
/// Permission helper utilities.
pub mod permissions;
/// Reaction tags attached to filter replies.
pub mod reactions;
