//! Fixed vocabularies offered by the submission form.

pub const TOPICS: &[&str] = &[
    "Technology",
    "Business",
    "Science",
    "Health & Wellness",
    "Arts & Culture",
    "Education",
    "Politics",
    "Sports",
    "Entertainment",
    "Personal Development",
];

pub const PODCAST_FORMATS: &[&str] = &[
    "Interview",
    "Solo Commentary",
    "Panel Discussion",
    "Storytelling",
    "Q&A",
    "News Roundup",
];

pub fn is_topic(value: &str) -> bool {
    TOPICS.contains(&value)
}

pub fn is_podcast_format(value: &str) -> bool {
    PODCAST_FORMATS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_membership() {
        assert!(is_topic("Technology"));
        assert!(!is_topic("technology"));
        assert!(is_podcast_format("Q&A"));
        assert!(!is_podcast_format("Technology"));
    }
}
