use serde::Serialize;
use std::fmt;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Keyword Match")]
    KeywordMatch,
    Formatting,
    Experience,
    Education,
    Skills,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::KeywordMatch,
        Category::Formatting,
        Category::Experience,
        Category::Education,
        Category::Skills,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::KeywordMatch => "Keyword Match",
            Category::Formatting => "Formatting",
            Category::Experience => "Experience",
            Category::Education => "Education",
            Category::Skills => "Skills",
        }
    }

    pub fn weight(self) -> Score {
        match self {
            Category::KeywordMatch => Weights::KEYWORD,
            Category::Formatting => Weights::FORMATTING,
            Category::Experience => Weights::EXPERIENCE,
            Category::Education => Weights::EDUCATION,
            Category::Skills => Weights::SKILLS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed category weights. They sum to 1.0.
pub struct Weights;

impl Weights {
    pub const KEYWORD: Score = 0.4;
    pub const FORMATTING: Score = 0.2;
    pub const EXPERIENCE: Score = 0.2;
    pub const EDUCATION: Score = 0.1;
    pub const SKILLS: Score = 0.1;
}

/// Fractional per-category scores, each in `[0.0, 1.0]`, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreCard {
    #[serde(rename = "Keyword Match")]
    pub keyword_match: Score,
    #[serde(rename = "Formatting")]
    pub formatting: Score,
    #[serde(rename = "Experience")]
    pub experience: Score,
    #[serde(rename = "Education")]
    pub education: Score,
    #[serde(rename = "Skills")]
    pub skills: Score,
}

impl ScoreCard {
    pub fn new(
        keyword_match: Score,
        formatting: Score,
        experience: Score,
        education: Score,
        skills: Score,
    ) -> Self {
        Self {
            keyword_match,
            formatting,
            experience,
            education,
            skills,
        }
    }

    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::KeywordMatch => self.keyword_match,
            Category::Formatting => self.formatting,
            Category::Experience => self.experience,
            Category::Education => self.education,
            Category::Skills => self.skills,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Score)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Weighted sum scaled to a percentage. Terms are added in category order so
    /// the result is reproducible to the last bit.
    pub fn weighted_total(&self) -> Score {
        let total = (self.keyword_match * Weights::KEYWORD)
            + (self.formatting * Weights::FORMATTING)
            + (self.experience * Weights::EXPERIENCE)
            + (self.education * Weights::EDUCATION)
            + (self.skills * Weights::SKILLS);
        total * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub total_score: Score,
    pub category_scores: ScoreCard,
}

impl ScoreResult {
    pub fn from_card(category_scores: ScoreCard) -> Self {
        Self {
            total_score: category_scores.weighted_total(),
            category_scores,
        }
    }
}
