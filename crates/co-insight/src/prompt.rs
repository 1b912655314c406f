//! Prompt construction.

use crate::config::InsightConfig;

/// Prompt for a numeric or option result.
pub fn numeric_prompt(result: &str, mode_label: &str, seed: u32, config: &InsightConfig) -> String {
    format!(
        "A random selection was just made with an entropy engine driven by millisecond timing.\n\
         Mode: {mode_label}\n\
         Result: {result}\n\
         Entropy seed (ms): {seed}\n\
         \n\
         Write a short \"fate insight\" about this result in one or two sentences. \
         Keep it mysterious and encouraging, as if the result were a cosmic coincidence or a lucky sign.\n\
         Answer in {language}.",
        language = config.language,
    )
}

/// Prompt for a divination reading.
pub fn divination_prompt(
    question: &str,
    hexagram_name: &str,
    line_name: &str,
    binary_code: &str,
    config: &InsightConfig,
) -> String {
    format!(
        "You are a scholar deeply versed in the I Ching (Zhou Yi).\n\
         The seeker's question: \"{question}\"\n\
         Hexagram cast: {hexagram_name}\n\
         Moving line: {line_name} (lines from top to bottom: {binary_code})\n\
         \n\
         Read the hexagram and its moving line against the question and give an interpretation \
         that is thoughtful, philosophical, and illuminating, in at most {limit} characters.\n\
         Answer in {language}.",
        limit = config.word_limit,
        language = config.language,
    )
}
