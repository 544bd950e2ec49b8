use serde::{Deserialize, Serialize};

/// Coarse fit label derived from a 1–10 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effectiveness {
    #[serde(rename = "Not Relevant")]
    NotRelevant,
    #[serde(rename = "Low Fit")]
    LowFit,
    #[serde(rename = "Neutral/Okay")]
    NeutralOkay,
    #[serde(rename = "Good Fit")]
    GoodFit,
    #[serde(rename = "Strong Match")]
    StrongMatch,
}

impl Effectiveness {
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            9..=u8::MAX => Effectiveness::StrongMatch,
            7..=8 => Effectiveness::GoodFit,
            4..=6 => Effectiveness::NeutralOkay,
            2..=3 => Effectiveness::LowFit,
            _ => Effectiveness::NotRelevant,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Effectiveness::NotRelevant => "Not Relevant",
            Effectiveness::LowFit => "Low Fit",
            Effectiveness::NeutralOkay => "Neutral/Okay",
            Effectiveness::GoodFit => "Good Fit",
            Effectiveness::StrongMatch => "Strong Match",
        }
    }
}
