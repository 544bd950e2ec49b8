/// Emotion tags a feedback record may carry.
pub const EMOTIONS: &[&str] = &[
    // Happy
    "Happy", "Joyful", "Excited", "Interested", "Proud", "Accepted", "Powerful",
    "Peaceful", "Intimate", "Loving", "Hopeful", "Playful", "Inspired", "Open",
    "Confident", "Important", "Fulfilled", "Respected", "Courageous", "Provocative",
    "Sensitive", "Energetic", "Liberated", "Ecstatic", "Eager", "Awe", "Astonished",
    "Curious", "Thoughtful",
    // Fearful
    "Fear", "Scared", "Anxious", "Insecure", "Submissive", "Hurt", "Humiliated",
    "Threatened", "Worried", "Overwhelmed", "Inadequate", "Inferior", "Worthless",
    "Insignificant",
    // Angry
    "Anger", "Mad", "Hateful", "Aggressive", "Frustrated", "Hostile", "Enraged",
    "Furious", "Irritated", "Infuriated", "Provoked", "Withdrawn", "Suspicious",
    "Skeptical", "Sarcastic", "Judgmental", "Resentful", "Jealous",
    // Disgusted
    "Disgust", "Critical", "Distant", "Disappointed", "Awful", "Loathing",
    "Repugnant", "Revolted", "Detestable", "Aversion",
    // Sad
    "Sad", "Lonely", "Bored", "Depressed", "Despair", "Abandoned", "Ignored",
    "Victimized", "Powerless", "Vulnerable", "Empty", "Isolated", "Apathetic",
    "Indifferent",
    // Guilt / shame
    "Guilty", "Remorseful", "Ashamed", "Hesitant", "Embarrassed",
    // Surprise
    "Surprise", "Startled", "Confused", "Amazed", "Perplexed", "Dismayed", "Shocked",
];

pub fn is_known_emotion(tag: &str) -> bool {
    EMOTIONS.iter().any(|e| e.eq_ignore_ascii_case(tag.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::rules::Category;

    #[test]
    fn test_template_emotions_are_in_vocabulary() {
        for category in [
            Category::Professional,
            Category::Creative,
            Category::Casual,
            Category::Neutral,
        ] {
            for template in category.templates() {
                for emotion in template.emotions {
                    assert!(
                        is_known_emotion(emotion),
                        "{emotion} ({}) missing from vocabulary",
                        template.variant
                    );
                }
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(is_known_emotion("interested"));
        assert!(is_known_emotion(" Eager "));
        assert!(!is_known_emotion("Hungry"));
    }
}
