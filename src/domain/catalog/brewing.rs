//! Roast levels and brew methods a user can attach to an entry.

use serde::{Deserialize, Serialize};

/// How dark the beans were roasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoastLevel {
    Light,
    Medium,
    MediumDark,
    Dark,
}

impl RoastLevel {
    pub const ALL: [RoastLevel; 4] = [
        RoastLevel::Light,
        RoastLevel::Medium,
        RoastLevel::MediumDark,
        RoastLevel::Dark,
    ];

    /// Stored/wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoastLevel::Light => "light",
            RoastLevel::Medium => "medium",
            RoastLevel::MediumDark => "medium-dark",
            RoastLevel::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoastLevel::Light => "Light",
            RoastLevel::Medium => "Medium",
            RoastLevel::MediumDark => "Medium-Dark",
            RoastLevel::Dark => "Dark",
        }
    }

    /// Parses a stored value; returns `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

/// How the coffee was prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrewMethod {
    PourOver,
    Espresso,
    FrenchPress,
    Aeropress,
    ColdBrew,
    Drip,
    MokaPot,
    Chemex,
    V60,
    Siphon,
    Instant,
}

impl BrewMethod {
    pub const ALL: [BrewMethod; 11] = [
        BrewMethod::PourOver,
        BrewMethod::Espresso,
        BrewMethod::FrenchPress,
        BrewMethod::Aeropress,
        BrewMethod::ColdBrew,
        BrewMethod::Drip,
        BrewMethod::MokaPot,
        BrewMethod::Chemex,
        BrewMethod::V60,
        BrewMethod::Siphon,
        BrewMethod::Instant,
    ];

    /// Stored/wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrewMethod::PourOver => "pour-over",
            BrewMethod::Espresso => "espresso",
            BrewMethod::FrenchPress => "french-press",
            BrewMethod::Aeropress => "aeropress",
            BrewMethod::ColdBrew => "cold-brew",
            BrewMethod::Drip => "drip",
            BrewMethod::MokaPot => "moka-pot",
            BrewMethod::Chemex => "chemex",
            BrewMethod::V60 => "v60",
            BrewMethod::Siphon => "siphon",
            BrewMethod::Instant => "instant",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BrewMethod::PourOver => "Pour Over",
            BrewMethod::Espresso => "Espresso",
            BrewMethod::FrenchPress => "French Press",
            BrewMethod::Aeropress => "AeroPress",
            BrewMethod::ColdBrew => "Cold Brew",
            BrewMethod::Drip => "Drip Coffee",
            BrewMethod::MokaPot => "Moka Pot",
            BrewMethod::Chemex => "Chemex",
            BrewMethod::V60 => "V60",
            BrewMethod::Siphon => "Siphon",
            BrewMethod::Instant => "Instant",
        }
    }

    /// Parses a stored value; returns `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == value)
    }
}
