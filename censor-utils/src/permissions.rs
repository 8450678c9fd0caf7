use poise::serenity_prelude as serenity;

/// Permission required to manage the keyword list.
pub const MODERATION_PERMISSION: serenity::Permissions = serenity::Permissions::MANAGE_MESSAGES;

/// Resolve the invoking author's effective guild permissions for a message command.
pub async fn resolve_user_permissions(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> anyhow::Result<serenity::Permissions> {
    let guild = guild_id.to_partial_guild(http).await?;
    if guild.owner_id == user_id {
        return Ok(serenity::Permissions::all());
    }

    let member = guild_id.member(http, user_id).await?;
    let roles = guild_id.roles(http).await?;

    let mut resolved = serenity::Permissions::empty();
    let everyone_role_id = serenity::RoleId::new(guild_id.get());

    for role in roles.values() {
        if role.id == everyone_role_id || member.roles.contains(&role.id) {
            resolved |= role.permissions;
        }
    }

    Ok(resolved)
}

/// Decide whether a resolved permission set grants `required`.
///
/// `None` means the permissions could not be determined, which denies.
pub fn grants(perms: Option<serenity::Permissions>, required: serenity::Permissions) -> bool {
    match perms {
        Some(perms) => {
            perms.contains(serenity::Permissions::ADMINISTRATOR) || perms.contains(required)
        }
        None => false,
    }
}
