/// A persisted keyword row. `word` is stored verbatim, without case folding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyword {
    pub id: i32,
    pub word: String,
}
