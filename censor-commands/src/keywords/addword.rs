use tracing::info;

use crate::CommandMeta;
use crate::checks::require_moderation_permission;
use crate::keywords::reply_to;
use censor_core::{Context, Error};
use censor_database::{KeywordService, KeywordStore};
use censor_utils::formatting::{keyword_added_message, missing_word_message};
use censor_utils::parse::normalize_phrase;

pub const META: CommandMeta = CommandMeta {
    name: "addword",
    desc: "Add a new word to censor",
    category: "keywords",
    usage: "!addword <word>",
};

#[poise::command(
    prefix_command,
    category = "Keywords",
    check = "require_moderation_permission"
)]
pub async fn addword(
    ctx: Context<'_>,
    #[description = "Word or phrase to censor"]
    #[rest]
    word: Option<String>,
) -> Result<(), Error> {
    let reply = add_keyword_reply(
        &ctx.data().keywords,
        word.as_deref().unwrap_or_default(),
        ctx.author().id.get(),
    )
    .await?;
    reply_to(ctx, reply).await
}

/// Persist and cache `raw` (whitespace-normalised) and build the reply.
///
/// An empty word leaves store and cache untouched and yields a warning.
pub async fn add_keyword_reply<S: KeywordStore>(
    service: &KeywordService<S>,
    raw: &str,
    moderator_id: u64,
) -> anyhow::Result<String> {
    let word = normalize_phrase(raw);
    if word.is_empty() {
        return Ok(missing_word_message().to_owned());
    }

    let outcome = service.add(&word).await?;
    info!(
        word = %word,
        moderator_id,
        persisted = outcome.persisted,
        cached = outcome.cached,
        "keyword added"
    );

    Ok(keyword_added_message(&word))
}
