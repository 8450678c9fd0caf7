use std::env;

use censor_utils::reactions::{default_reaction_tags, parse_reaction_tags};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Startup settings read once from the environment.
#[derive(Clone, Debug)]
pub struct BotConfig {
    pub discord_token: String,
    pub database_url: String,
    pub max_connections: u32,
    pub reactions: Vec<String>,
}

impl BotConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| anyhow::anyhow!("DISCORD_TOKEN must be set"))?;
        let database_url =
            env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let reactions = match env::var("CENSOR_REACTIONS") {
            Ok(raw) => parse_reaction_tags(&raw),
            Err(_) => default_reaction_tags(),
        };

        Ok(Self {
            discord_token,
            database_url,
            max_connections: env_u32("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
            reactions,
        })
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    parse_u32(env::var(key).ok().as_deref(), default)
}

fn parse_u32(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|parsed| *parsed > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::parse_u32;

    #[test]
    fn numbers_fall_back_on_garbage_or_zero() {
        assert_eq!(parse_u32(Some("12"), 5), 12);
        assert_eq!(parse_u32(Some("zero"), 5), 5);
        assert_eq!(parse_u32(Some("0"), 5), 5);
        assert_eq!(parse_u32(None, 5), 5);
    }
}
