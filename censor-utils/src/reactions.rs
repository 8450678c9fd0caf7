use rand::Rng;
use rand::seq::SliceRandom;

/// Custom emoji tags used when no override is configured.
pub const DEFAULT_REACTION_TAGS: &[&str] = &[
    "<:MONKA:1404546358245068974>",
    "<:NAILS:1404545586140545114>",
];

pub fn default_reaction_tags() -> Vec<String> {
    DEFAULT_REACTION_TAGS
        .iter()
        .map(|tag| (*tag).to_owned())
        .collect()
}

/// Parse a comma-separated tag list. Blank entries are dropped; an empty
/// result falls back to [`DEFAULT_REACTION_TAGS`].
pub fn parse_reaction_tags(raw: &str) -> Vec<String> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect();

    if tags.is_empty() {
        default_reaction_tags()
    } else {
        tags
    }
}

/// Uniformly pick one tag. Returns an empty string for an empty set.
pub fn pick_reaction<'a, R: Rng + ?Sized>(rng: &mut R, tags: &'a [String]) -> &'a str {
    tags.choose(rng).map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{DEFAULT_REACTION_TAGS, default_reaction_tags, parse_reaction_tags, pick_reaction};

    #[test]
    fn parses_comma_separated_tags() {
        assert_eq!(
            parse_reaction_tags(" :a: , ,:b:,"),
            vec![":a:".to_owned(), ":b:".to_owned()]
        );
    }

    #[test]
    fn blank_override_uses_defaults() {
        assert_eq!(parse_reaction_tags(" , "), default_reaction_tags());
        assert_eq!(default_reaction_tags().len(), DEFAULT_REACTION_TAGS.len());
    }

    #[test]
    fn picks_only_from_the_given_set() {
        let tags = default_reaction_tags();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let tag = pick_reaction(&mut rng, &tags);
            assert!(tags.iter().any(|candidate| candidate == tag));
            seen.insert(tag.to_owned());
        }

        assert_eq!(seen.len(), tags.len());
    }

    #[test]
    fn empty_set_yields_empty_tag() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_reaction(&mut rng, &[]), "");
    }
}
