use rand::Rng;
use rand::seq::IndexedRandom;

/// Canned assistant lines. `{message}` is replaced by the user's text.
const REPLY_TEMPLATES: &[&str] = &[
    "I understand you're asking about '{message}'. Let me help you find relevant saved content.",
    "Based on your query about '{message}', I can help you organize your saved posts or set up reminders.",
    "That's an interesting question! I can help you manage your saved content more effectively.",
    "I'm here to help you with your saved posts and reminders. What specific assistance do you need?",
    "Regarding '{message}', I can help you categorize your content or create relevant reminders.",
];

fn render(template: &str, message: &str) -> String {
    template.replace("{message}", message)
}

/// Picks one template uniformly at random.
pub fn reply_with<R: Rng + ?Sized>(message: &str, rng: &mut R) -> String {
    let template = REPLY_TEMPLATES.choose(rng).copied().unwrap_or(REPLY_TEMPLATES[0]);
    render(template, message)
}

pub fn reply_to(message: &str) -> String {
    reply_with(message, &mut rand::rng())
}

/// Every reply `reply_to(message)` could produce.
pub fn possible_replies(message: &str) -> Vec<String> {
    REPLY_TEMPLATES.iter().map(|t| render(t, message)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reply_is_always_a_template() {
        let allowed = possible_replies("hello");
        for _ in 0..50 {
            assert!(allowed.contains(&reply_to("hello")));
        }
    }

    #[test]
    fn interpolates_user_text_verbatim() {
        let replies = possible_replies("{message} & more");
        assert!(replies[0].contains("'{message} & more'"));
        assert_eq!(replies.iter().filter(|r| r.contains("{message} & more")).count(), 3);
    }

    #[test]
    fn every_template_is_reachable() {
        let mut rng = rand::rng();
        let seen: HashSet<String> = (0..500).map(|_| reply_with("x", &mut rng)).collect();
        assert_eq!(seen.len(), REPLY_TEMPLATES.len());
    }
}
