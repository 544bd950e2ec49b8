//! Rule table — maps a personality's traits to a response category and the
//! category to its canned feedback templates.
//!
//! Classification walks `CATEGORY_RULES` top to bottom; the first trait tag the
//! personality carries decides the category. No match falls back to `Neutral`.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Professional,
    Creative,
    Casual,
    Neutral,
}

/// Trait tags in priority order.
pub const CATEGORY_RULES: &[(&str, Category)] = &[
    ("Professional", Category::Professional),
    ("Creative", Category::Creative),
    ("Casual", Category::Casual),
];

/// Returns the category of the highest-priority rule whose tag appears in `traits`.
/// Tags compare ASCII case-insensitively.
pub fn classify(traits: &[String]) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(tag, _)| traits.iter().any(|t| t.trim().eq_ignore_ascii_case(tag)))
        .map(|&(_, category)| category)
        .unwrap_or(Category::Neutral)
}

/// Inclusive integer range a rating is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBand {
    pub min: u8,
    pub max: u8,
}

impl RatingBand {
    pub const fn new(min: u8, max: u8) -> Self {
        RatingBand { min, max }
    }

    /// Uniform draw over `min..=max`.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, rating: u8) -> bool {
        (self.min..=self.max).contains(&rating)
    }
}

/// Fixed text and tags emitted for one response variant.
#[derive(Debug)]
pub struct FeedbackTemplate {
    pub variant: &'static str,
    pub thought: &'static str,
    pub emotional_response: &'static str,
    pub emotions: &'static [&'static str],
    pub categories: &'static [&'static str],
    pub rating: RatingBand,
}

static PROFESSIONAL_TEMPLATES: [FeedbackTemplate; 1] = [FeedbackTemplate {
    variant: "professional",
    thought: "This ad effectively communicates the product's value proposition with a clean, professional aesthetic.",
    emotional_response: "Positively impressed by the design quality and messaging clarity.",
    emotions: &["Interested", "Confident", "Respected"],
    categories: &["Design", "Messaging", "Professional Appeal"],
    rating: RatingBand::new(7, 10),
}];

// Creative reactions split evenly between a hopeful and a dismissive take.
static CREATIVE_TEMPLATES: [FeedbackTemplate; 2] = [
    FeedbackTemplate {
        variant: "creative_positive",
        thought: "The color palette is appealing, but the typography lacks originality. The composition could be more dynamic.",
        emotional_response: "Somewhat inspired but wanting more creative risks.",
        emotions: &["Curious", "Critical", "Hopeful"],
        categories: &["Visual Design", "Typography", "Innovation"],
        rating: RatingBand::new(6, 9),
    },
    FeedbackTemplate {
        variant: "creative_critical",
        thought: "The designs are too conventional and don't offer anything new to the market. I was hoping for more innovative pieces.",
        emotional_response: "Underwhelmed by the lack of originality.",
        emotions: &["Disappointed", "Bored", "Indifferent"],
        categories: &["Innovation", "Uniqueness", "Design Trends"],
        rating: RatingBand::new(2, 5),
    },
];

static CASUAL_TEMPLATES: [FeedbackTemplate; 1] = [FeedbackTemplate {
    variant: "casual",
    thought: "Love how approachable this makes shopping feel! The style is exactly what I'm looking for.",
    emotional_response: "Excited about the possibility of purchasing these items.",
    emotions: &["Happy", "Excited", "Eager"],
    categories: &["Affordability", "Style", "Approachability"],
    rating: RatingBand::new(8, 10),
}];

static NEUTRAL_TEMPLATES: [FeedbackTemplate; 1] = [FeedbackTemplate {
    variant: "neutral",
    thought: "This advertisement is clear and informative, though it could be more engaging.",
    emotional_response: "Generally positive, but not entirely convinced.",
    emotions: &["Interested", "Thoughtful", "Curious"],
    categories: &["Clarity", "Information", "Engagement"],
    rating: RatingBand::new(4, 7),
}];

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Professional => "Professional",
            Category::Creative => "Creative",
            Category::Casual => "Casual",
            Category::Neutral => "Neutral",
        }
    }

    /// Case-insensitive inverse of [`Category::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Category::Professional,
            Category::Creative,
            Category::Casual,
            Category::Neutral,
        ]
        .into_iter()
        .find(|c| c.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// All response variants for this category. Never empty.
    pub fn templates(self) -> &'static [FeedbackTemplate] {
        match self {
            Category::Professional => &PROFESSIONAL_TEMPLATES,
            Category::Creative => &CREATIVE_TEMPLATES,
            Category::Casual => &CASUAL_TEMPLATES,
            Category::Neutral => &NEUTRAL_TEMPLATES,
        }
    }

    /// Picks one variant uniformly. Single-variant categories consume no randomness.
    pub fn pick_template<R: Rng + ?Sized>(self, rng: &mut R) -> &'static FeedbackTemplate {
        let templates = self.templates();
        match templates {
            [only] => only,
            _ => &templates[rng.gen_range(0..templates.len())],
        }
    }
}
