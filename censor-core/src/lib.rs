use censor_database::{Database, KeywordService};

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub keywords: KeywordService<Database>,
    pub reactions: Vec<String>,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
