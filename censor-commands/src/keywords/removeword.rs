use tracing::info;

use crate::CommandMeta;
use crate::checks::require_moderation_permission;
use crate::keywords::reply_to;
use censor_core::{Context, Error};
use censor_database::{KeywordService, KeywordStore};
use censor_utils::formatting::keyword_removed_message;
use censor_utils::parse::normalize_phrase;

pub const META: CommandMeta = CommandMeta {
    name: "removeword",
    desc: "Remove a word from the censor list",
    category: "keywords",
    usage: "!removeword <word>",
};

#[poise::command(
    prefix_command,
    category = "Keywords",
    check = "require_moderation_permission"
)]
pub async fn removeword(
    ctx: Context<'_>,
    #[description = "Word or phrase to stop censoring"]
    #[rest]
    word: Option<String>,
) -> Result<(), Error> {
    let reply = remove_keyword_reply(
        &ctx.data().keywords,
        word.as_deref().unwrap_or_default(),
        ctx.author().id.get(),
    )
    .await?;
    reply_to(ctx, reply).await
}

/// Delete `raw` from store and cache and build the reply.
///
/// The reply confirms removal whether or not the word existed; an empty word
/// is passed through as a no-op delete.
pub async fn remove_keyword_reply<S: KeywordStore>(
    service: &KeywordService<S>,
    raw: &str,
    moderator_id: u64,
) -> anyhow::Result<String> {
    let word = normalize_phrase(raw);
    let outcome = service.remove(&word).await?;
    info!(
        word = %word,
        moderator_id,
        deleted_rows = outcome.deleted_rows,
        evicted = outcome.evicted,
        "keyword removed"
    );

    Ok(keyword_removed_message(&word))
}
