use crate::checks::require_moderation_permission;
use crate::keywords::reply_to;
use crate::{COMMANDS, CommandMeta};
use censor_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Show this command list",
    category: "utility",
    usage: "!help",
};

#[poise::command(
    prefix_command,
    category = "Utility",
    check = "require_moderation_permission"
)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    reply_to(ctx, help_message()).await
}

/// Static help text covering the keyword commands and the permission they need.
pub fn help_message() -> String {
    let lines = COMMANDS
        .iter()
        .filter(|meta| meta.category == "keywords")
        .map(|meta| format!("`{}` - {}", meta.usage, meta.desc))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "**Censorship Bot Commands**\n\n{}\n\n*Note: You need Manage Messages permission to use these commands.*",
        lines
    )
}
