//! Type-safe enumerations for benchmark cohorts.
//!
//! Every value here appears verbatim in the generated import files, so the
//! serialized spelling is part of the output contract. Athletics and the
//! rated sports (rugby, Irish dancing) spell genders and levels differently,
//! which is why they get separate enums instead of one shared vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age group of a benchmark cohort.
///
/// Variants are declared youngest first; the derived ordering is used when
/// grouping summary counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    U6,
    U8,
    U10,
    U12,
    U14,
    U16,
    U18,
    U20,
    Senior,
    Adult,
}

impl AgeGroup {
    /// Returns the label as written in the import files.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::U6 => "U6",
            AgeGroup::U8 => "U8",
            AgeGroup::U10 => "U10",
            AgeGroup::U12 => "U12",
            AgeGroup::U14 => "U14",
            AgeGroup::U16 => "U16",
            AgeGroup::U18 => "U18",
            AgeGroup::U20 => "U20",
            AgeGroup::Senior => "Senior",
            AgeGroup::Adult => "Adult",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "U6" => Ok(AgeGroup::U6),
            "U8" => Ok(AgeGroup::U8),
            "U10" => Ok(AgeGroup::U10),
            "U12" => Ok(AgeGroup::U12),
            "U14" => Ok(AgeGroup::U14),
            "U16" => Ok(AgeGroup::U16),
            "U18" => Ok(AgeGroup::U18),
            "U20" => Ok(AgeGroup::U20),
            "SENIOR" => Ok(AgeGroup::Senior),
            "ADULT" => Ok(AgeGroup::Adult),
            _ => Err(format!("Unknown age group: {s}")),
        }
    }
}

/// Athletics gender, serialized capitalized ("Male", "Female").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// Gender scope for rated sports.
///
/// `All` marks a benchmark shared by every gender; the split variants are
/// used once strength or speed differences make a shared standard unfair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderScope {
    All,
    Male,
    Female,
}

impl GenderScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderScope::All => "all",
            GenderScope::Male => "male",
            GenderScope::Female => "female",
        }
    }

    /// Returns true for the gender-specific variants.
    pub fn is_specific(&self) -> bool {
        !matches!(self, GenderScope::All)
    }
}

impl fmt::Display for GenderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenderScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(GenderScope::All),
            "MALE" => Ok(GenderScope::Male),
            "FEMALE" => Ok(GenderScope::Female),
            _ => Err(format!("Unknown gender scope: {s}")),
        }
    }
}

/// Athletics competitive level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompetitiveLevel {
    Developmental,
    Competitive,
    Elite,
}

impl CompetitiveLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitiveLevel::Developmental => "Developmental",
            CompetitiveLevel::Competitive => "Competitive",
            CompetitiveLevel::Elite => "Elite",
        }
    }

    /// Lowercase form used inside generated sentences.
    pub fn as_lower(&self) -> &'static str {
        match self {
            CompetitiveLevel::Developmental => "developmental",
            CompetitiveLevel::Competitive => "competitive",
            CompetitiveLevel::Elite => "elite",
        }
    }
}

impl fmt::Display for CompetitiveLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompetitiveLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEVELOPMENTAL" => Ok(CompetitiveLevel::Developmental),
            "COMPETITIVE" => Ok(CompetitiveLevel::Competitive),
            "ELITE" => Ok(CompetitiveLevel::Elite),
            _ => Err(format!("Unknown competitive level: {s}")),
        }
    }
}

/// Level tier for rated sports, matching the passport database schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingLevel {
    Recreational,
    Development,
    Competitive,
    Elite,
}

impl RatingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingLevel::Recreational => "recreational",
            RatingLevel::Development => "development",
            RatingLevel::Competitive => "competitive",
            RatingLevel::Elite => "elite",
        }
    }
}

impl fmt::Display for RatingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RECREATIONAL" => Ok(RatingLevel::Recreational),
            "DEVELOPMENT" => Ok(RatingLevel::Development),
            "COMPETITIVE" => Ok(RatingLevel::Competitive),
            "ELITE" => Ok(RatingLevel::Elite),
            _ => Err(format!("Unknown rating level: {s}")),
        }
    }
}

/// Athletics event group a benchmark applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventGroup {
    General,
    Sprints,
    #[serde(rename = "Middle Distance")]
    MiddleDistance,
    #[serde(rename = "Long Distance")]
    LongDistance,
    Hurdles,
}

impl EventGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventGroup::General => "General",
            EventGroup::Sprints => "Sprints",
            EventGroup::MiddleDistance => "Middle Distance",
            EventGroup::LongDistance => "Long Distance",
            EventGroup::Hurdles => "Hurdles",
        }
    }

    /// Lowercase form used inside generated sentences.
    pub fn as_lower(&self) -> &'static str {
        match self {
            EventGroup::General => "general",
            EventGroup::Sprints => "sprints",
            EventGroup::MiddleDistance => "middle distance",
            EventGroup::LongDistance => "long distance",
            EventGroup::Hurdles => "hurdles",
        }
    }
}

impl fmt::Display for EventGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "GENERAL" => Ok(EventGroup::General),
            "SPRINTS" => Ok(EventGroup::Sprints),
            "MIDDLEDISTANCE" => Ok(EventGroup::MiddleDistance),
            "LONGDISTANCE" => Ok(EventGroup::LongDistance),
            "HURDLES" => Ok(EventGroup::Hurdles),
            _ => Err(format!("Unknown event group: {s}")),
        }
    }
}

/// Sport a benchmark set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Athletics,
    Rugby,
    IrishDancing,
}

impl Sport {
    /// Sport code used by the passport database (`sportCode`).
    pub fn code(&self) -> &'static str {
        match self {
            Sport::Athletics => "athletics",
            Sport::Rugby => "rugby",
            Sport::IrishDancing => "irish_dancing",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sport::Athletics => "Athletics",
            Sport::Rugby => "Rugby",
            Sport::IrishDancing => "Irish Dancing",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Sport {
    type Err = String;

    /// Accepts sport codes, display names, and the CLI's kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "ATHLETICS" => Ok(Sport::Athletics),
            "RUGBY" => Ok(Sport::Rugby),
            "IRISHDANCING" => Ok(Sport::IrishDancing),
            _ => Err(format!("Unknown sport: {s}")),
        }
    }
}
