use poise::serenity_prelude as serenity;
use tracing::{error, info};

use censor_core::Data;
use censor_database::KeywordCache;
use censor_utils::formatting::censor_reply;
use censor_utils::reactions::pick_reaction;

/// Check an incoming message against the cached keywords and reply once on the
/// first match.
pub async fn handle_message_keyword_filter(
    ctx: &serenity::Context,
    data: &Data,
    message: &serenity::Message,
) {
    // Ignore bots and webhooks.
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    let Some(reply) =
        censor_reply_for(data.keywords.cache(), &data.reactions, &message.content).await
    else {
        return;
    };

    info!(
        author_id = %message.author.id,
        channel_id = %message.channel_id,
        "censored keyword matched"
    );

    if let Err(source) = message.reply(&ctx.http, reply).await {
        error!(?source, "failed to send censor reply");
    }
}

/// Build the censor reply for `content`, or `None` when nothing should be sent.
///
/// Command messages are scanned like any other text; the command framework
/// handles them independently.
async fn censor_reply_for(
    cache: &KeywordCache,
    reactions: &[String],
    content: &str,
) -> Option<String> {
    let keyword = cache.first_match(content).await?;
    let reaction = pick_reaction(&mut rand::thread_rng(), reactions);
    Some(censor_reply(reaction, &keyword))
}

#[cfg(test)]
mod tests {
    use censor_database::KeywordCache;
    use censor_utils::reactions::default_reaction_tags;

    use super::censor_reply_for;

    async fn cache_with(words: &[&str]) -> KeywordCache {
        let cache = KeywordCache::new();
        cache.replace_all(words.iter().copied()).await;
        cache
    }

    #[tokio::test]
    async fn substring_match_replies_with_keyword() {
        let cache = cache_with(&["cat"]).await;
        let tags = default_reaction_tags();

        let reply = censor_reply_for(&cache, &tags, "the category is open")
            .await
            .unwrap();

        assert!(reply.ends_with(" censor: `cat`"));
        assert!(tags.iter().any(|tag| reply.starts_with(tag.as_str())));
    }

    #[tokio::test]
    async fn no_match_sends_nothing() {
        let cache = cache_with(&["cat"]).await;

        assert_eq!(
            censor_reply_for(&cache, &default_reaction_tags(), "dog").await,
            None
        );
    }

    #[tokio::test]
    async fn only_first_keyword_is_reported() {
        let cache = cache_with(&["cat", "category"]).await;

        let reply = censor_reply_for(&cache, &default_reaction_tags(), "CATEGORY")
            .await
            .unwrap();

        assert!(reply.ends_with("censor: `cat`"));
        assert!(!reply.contains("category"));
    }

    #[tokio::test]
    async fn case_insensitive_match() {
        let cache = cache_with(&["Spam"]).await;

        let reply = censor_reply_for(&cache, &default_reaction_tags(), "buy SPAM now").await;

        assert!(reply.is_some_and(|text| text.ends_with("censor: `spam`")));
    }

    #[tokio::test]
    async fn command_messages_are_filtered_too() {
        let cache = cache_with(&["cat"]).await;
        let tags = default_reaction_tags();

        let reply = censor_reply_for(&cache, &tags, "!removeword cat").await;
        assert!(reply.is_some_and(|text| text.ends_with("censor: `cat`")));

        assert!(censor_reply_for(&cache, &tags, "!addword cat").await.is_some());
        assert!(censor_reply_for(&cache, &tags, "!listwords").await.is_none());
    }
}
