use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Display rank for types outside the fixed table (including the gamebreaker)
pub const UNKNOWN_TYPE_RANK: u32 = 999;

/// Whether a match counts towards the regular tally or is the fixture decider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    Regular,
    Tiebreak,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
)]
pub enum MatchType {
    #[strum(to_string = "Men's Doubles")]
    MensDoubles,
    #[strum(to_string = "Women's Doubles")]
    WomensDoubles,
    #[strum(to_string = "Men's Singles")]
    MensSingles,
    #[strum(to_string = "Women's Singles")]
    WomensSingles,
    #[strum(to_string = "Men's Doubles (2)")]
    MensDoubles2,
    #[strum(to_string = "Mixed Doubles")]
    MixedDoubles,
    #[strum(to_string = "Gamebreaker")]
    Gamebreaker,
    #[strum(to_string = "Unknown")]
    Unknown,
}

impl MatchType {
    /// Normalised spellings seen in stored records
    fn aliases(self) -> &'static [&'static str] {
        match self {
            MatchType::MensDoubles => &["mensdoubles", "mensdoubles1", "md", "md1"],
            MatchType::WomensDoubles => &["womensdoubles", "wd"],
            MatchType::MensSingles => &["menssingles", "ms"],
            MatchType::WomensSingles => &["womenssingles", "ws"],
            MatchType::MensDoubles2 => &["mensdoubles2", "md2"],
            MatchType::MixedDoubles => &["mixeddoubles", "mixed", "xd"],
            MatchType::Gamebreaker => &[
                "gamebreaker",
                "dreambreaker",
                "tiebreak",
                "tiebreaker",
                "decider",
            ],
            MatchType::Unknown => &[],
        }
    }

    /// Looks a single label up in the alias table
    pub fn from_label(label: &str) -> Self {
        let key = normalize_label(label);
        if key.is_empty() {
            return MatchType::Unknown;
        }
        MatchType::iter()
            .find(|ty| ty.aliases().contains(&key.as_str()))
            .unwrap_or(MatchType::Unknown)
    }

    /// Resolves the type from the enum-ish field and the free-text label.
    /// Either one naming the gamebreaker is enough.
    pub fn resolve(match_type: Option<&str>, label: Option<&str>) -> Self {
        let from_type = match_type.map(Self::from_label).unwrap_or(MatchType::Unknown);
        let from_label = label.map(Self::from_label).unwrap_or(MatchType::Unknown);

        if from_type == MatchType::Gamebreaker || from_label == MatchType::Gamebreaker {
            return MatchType::Gamebreaker;
        }
        if from_type != MatchType::Unknown {
            from_type
        } else {
            from_label
        }
    }

    pub fn kind(self) -> MatchKind {
        match self {
            MatchType::Gamebreaker => MatchKind::Tiebreak,
            _ => MatchKind::Regular,
        }
    }

    /// Position of this type inside a fixture's running order
    pub fn display_rank(self) -> u32 {
        match self {
            MatchType::MensDoubles => 1,
            MatchType::WomensDoubles => 2,
            MatchType::MensSingles => 3,
            MatchType::WomensSingles => 4,
            MatchType::MensDoubles2 => 5,
            MatchType::MixedDoubles => 6,
            MatchType::Gamebreaker | MatchType::Unknown => UNKNOWN_TYPE_RANK,
        }
    }
}

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
