/// Reply posted when a message contains a censored keyword.
pub fn censor_reply(reaction: &str, keyword: &str) -> String {
    format!("{} censor: `{}`", reaction, keyword)
}

pub fn keyword_added_message(word: &str) -> String {
    format!("Added keyword: `{}`", word)
}

pub fn keyword_removed_message(word: &str) -> String {
    format!("Removed keyword: `{}`", word)
}

pub fn missing_word_message() -> &'static str {
    "⚠️ Please provide a word to add."
}

/// Render the cached keyword list, one `- word` line each.
pub fn keyword_list_message(words: &[String]) -> String {
    if words.is_empty() {
        return "No keywords set.".to_owned();
    }

    let lines = words
        .iter()
        .map(|word| format!("- {}", word))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Current keywords:\n{}", lines)
}
