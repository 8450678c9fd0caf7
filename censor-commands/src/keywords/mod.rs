pub mod addword;
pub mod listwords;
pub mod removeword;

use censor_core::{Context, Error};

/// Send `text` as a threaded reply to the invoking message.
pub(crate) async fn reply_to(ctx: Context<'_>, text: impl Into<String>) -> Result<(), Error> {
    ctx.send(poise::CreateReply::default().content(text).reply(true))
        .await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use censor_database::{KeywordService, MemoryKeywordStore};

    pub fn service() -> KeywordService<MemoryKeywordStore> {
        KeywordService::new(MemoryKeywordStore::new())
    }
}
