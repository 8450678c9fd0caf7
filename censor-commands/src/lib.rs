pub mod checks;
pub mod keywords;
pub mod utility;

use censor_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    keywords::addword::META,
    keywords::removeword::META,
    keywords::listwords::META,
    utility::help::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        keywords::addword::addword(),
        keywords::removeword::removeword(),
        keywords::listwords::listwords(),
        utility::help::help(),
    ]
}

#[cfg(test)]
mod tests {
    use super::{COMMANDS, commands};

    #[test]
    fn metadata_matches_registered_commands() {
        let registered = commands();
        assert_eq!(registered.len(), COMMANDS.len());
        for meta in COMMANDS {
            assert!(registered.iter().any(|command| command.name == meta.name));
        }
    }
}
