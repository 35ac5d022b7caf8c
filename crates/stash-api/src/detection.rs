/// Words that mark a saved post as an opportunity worth tracking.
pub const OPPORTUNITY_KEYWORDS: [&str; 6] = [
    "job",
    "hiring",
    "opportunity",
    "scholarship",
    "deadline",
    "apply",
];

/// True if any keyword appears, case-insensitively, anywhere in the title or
/// summary. Plain substring match: "jobs" and "applying" count.
pub fn is_opportunity(title: &str, summary: &str) -> bool {
    let title = title.to_lowercase();
    let summary = summary.to_lowercase();

    OPPORTUNITY_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword) || summary.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_keyword_in_title() {
        assert!(is_opportunity("Urgent hiring now", ""));
        assert!(is_opportunity("SCHOLARSHIP round two", "nothing here"));
    }

    #[test]
    fn flags_keyword_in_summary() {
        assert!(is_opportunity("Weekly digest", "Applications close soon, apply today"));
    }

    #[test]
    fn matches_inside_longer_words() {
        assert!(is_opportunity("Jobs board", ""));
        assert!(is_opportunity("", "Deadlines approaching"));
    }

    #[test]
    fn ignores_posts_without_keywords() {
        assert!(!is_opportunity("Cute cat video", "A kitten chasing a laser pointer"));
    }
}
