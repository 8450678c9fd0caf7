use crate::CommandMeta;
use crate::checks::require_moderation_permission;
use crate::keywords::reply_to;
use censor_core::{Context, Error};
use censor_database::{KeywordService, KeywordStore};
use censor_utils::formatting::keyword_list_message;

pub const META: CommandMeta = CommandMeta {
    name: "listwords",
    desc: "List all censored words",
    category: "keywords",
    usage: "!listwords",
};

#[poise::command(
    prefix_command,
    category = "Keywords",
    check = "require_moderation_permission"
)]
pub async fn listwords(ctx: Context<'_>) -> Result<(), Error> {
    let reply = list_keywords_reply(&ctx.data().keywords).await;
    reply_to(ctx, reply).await
}

/// Render the cached keywords. Reads the cache only, never the store.
pub async fn list_keywords_reply<S: KeywordStore>(service: &KeywordService<S>) -> String {
    keyword_list_message(&service.list().await)
}
