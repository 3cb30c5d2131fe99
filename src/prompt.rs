/// Max length (chars) for the joined headline block placed in the summary prompt.
pub const MAX_HEADLINES_LEN: usize = 8_000;

/// Max length (chars) for the draft summary placed in the refinement prompt.
///
/// The first pass's output is fed straight back into the second prompt, so
/// without a cap a runaway draft would grow the second request without bound.
pub const MAX_DRAFT_LEN: usize = 8_000;

/// Remove control characters and hard-truncate to `max_len` chars.
pub fn sanitize_internal(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .take(max_len)
        .collect()
}

/// Join the caller's headlines into a single block for the summary prompt.
pub fn join_headlines(headlines: &[String]) -> String {
    let joined = headlines
        .iter()
        .map(|h| h.trim())
        .collect::<Vec<_>>()
        .join(", ");
    sanitize_internal(&joined, MAX_HEADLINES_LEN)
}

/// The user prompt for the first (summarize) pass.
pub fn summary_prompt(headlines: &[String]) -> String {
    format!(
        "Please generate a concise summary based on the following news headlines:\n\n{}\n\nSummary:",
        join_headlines(headlines)
    )
}

/// The user prompt for the second (refinement) pass.
pub fn refinement_prompt(draft: &str) -> String {
    format!(
        "Please optimize the following summary to make it more natural and smooth:\n\n{}\n\nRefined summary:",
        sanitize_internal(draft, MAX_DRAFT_LEN)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_headlines_uses_comma_delimiter() {
        let headlines = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(join_headlines(&headlines), "A, B, C");
    }

    #[test]
    fn join_headlines_trims_whitespace() {
        let headlines = vec!["  market up  ".to_string(), "rates hold".to_string()];
        assert_eq!(join_headlines(&headlines), "market up, rates hold");
    }

    #[test]
    fn sanitize_internal_strips_control_chars() {
        let input = "headline with \u{0000} control \u{007F} chars";
        assert_eq!(
            sanitize_internal(input, 100),
            "headline with  control  chars"
        );
    }

    #[test]
    fn sanitize_internal_truncates() {
        let long = "a".repeat(MAX_DRAFT_LEN + 100);
        assert_eq!(sanitize_internal(&long, MAX_DRAFT_LEN).len(), MAX_DRAFT_LEN);
    }

    #[test]
    fn refinement_prompt_embeds_draft() {
        let prompt = refinement_prompt("the draft text");
        assert!(prompt.contains("the draft text"));
        assert!(prompt.starts_with("Please optimize"));
    }
}
