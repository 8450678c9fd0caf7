use poise::serenity_prelude as serenity;
use tracing::{debug, warn};

use censor_core::{Context, Error};
use censor_utils::permissions::{MODERATION_PERMISSION, grants, resolve_user_permissions};

/// Command check: the author must hold Manage Messages in the guild the
/// command was sent from.
///
/// A denial returns `Ok(false)` and the framework error handler drops it
/// without replying, so the command body never runs.
pub async fn require_moderation_permission(ctx: Context<'_>) -> Result<bool, Error> {
    let guild_id = ctx.guild_id();

    let perms = match guild_id {
        Some(guild_id) => {
            match resolve_user_permissions(ctx.http(), guild_id, ctx.author().id).await {
                Ok(perms) => Some(perms),
                Err(source) => {
                    warn!(?source, %guild_id, "failed to resolve author permissions; denying");
                    None
                }
            }
        }
        None => None,
    };

    let allowed = moderation_allowed(guild_id, perms);
    if !allowed {
        debug!(
            user_id = %ctx.author().id,
            guild_id = ?guild_id,
            command = %ctx.command().name,
            "moderation permission missing; command ignored"
        );
    }

    Ok(allowed)
}

/// Commands are only honoured inside a guild, from an author whose resolved
/// permissions include Manage Messages. Direct messages and unresolvable
/// permissions deny.
pub fn moderation_allowed(
    guild_id: Option<serenity::GuildId>,
    perms: Option<serenity::Permissions>,
) -> bool {
    guild_id.is_some() && grants(perms, MODERATION_PERMISSION)
}
