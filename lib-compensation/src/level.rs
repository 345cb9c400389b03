//! Recognition levels
//!
//! Pin levels are informational: no earnings calculation reads them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognition level held by a participant
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum IboLevel {
    #[default]
    Ibo = 0,
    SilverProducer = 1,
    GoldProducer = 2,
    Platinum = 3,
    FoundersPlatinum = 4,
    Ruby = 5,
    FoundersRuby = 6,
    Sapphire = 7,
    FoundersSapphire = 8,
    Emerald = 9,
    FoundersEmerald = 10,
    Diamond = 11,
    FoundersDiamond = 12,
    ExecutiveDiamond = 13,
    FoundersExecutiveDiamond = 14,
    DoubleDiamond = 15,
    FoundersDoubleDiamond = 16,
    TripleDiamond = 17,
    FoundersTripleDiamond = 18,
    Crown = 19,
    FoundersCrown = 20,
    CrownAmbassador = 21,
    FoundersCrownAmbassador = 22,
}

impl IboLevel {
    /// All levels in rank order
    pub const ALL: &'static [IboLevel] = &[
        IboLevel::Ibo,
        IboLevel::SilverProducer,
        IboLevel::GoldProducer,
        IboLevel::Platinum,
        IboLevel::FoundersPlatinum,
        IboLevel::Ruby,
        IboLevel::FoundersRuby,
        IboLevel::Sapphire,
        IboLevel::FoundersSapphire,
        IboLevel::Emerald,
        IboLevel::FoundersEmerald,
        IboLevel::Diamond,
        IboLevel::FoundersDiamond,
        IboLevel::ExecutiveDiamond,
        IboLevel::FoundersExecutiveDiamond,
        IboLevel::DoubleDiamond,
        IboLevel::FoundersDoubleDiamond,
        IboLevel::TripleDiamond,
        IboLevel::FoundersTripleDiamond,
        IboLevel::Crown,
        IboLevel::FoundersCrown,
        IboLevel::CrownAmbassador,
        IboLevel::FoundersCrownAmbassador,
    ];

    /// Rank ordinal (0 = IBO)
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Look up a level by rank ordinal
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(rank as usize).copied()
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            IboLevel::Ibo => "IBO",
            IboLevel::SilverProducer => "Silver Producer",
            IboLevel::GoldProducer => "Gold Producer",
            IboLevel::Platinum => "Platinum",
            IboLevel::FoundersPlatinum => "Founders Platinum",
            IboLevel::Ruby => "Ruby",
            IboLevel::FoundersRuby => "Founders Ruby",
            IboLevel::Sapphire => "Sapphire",
            IboLevel::FoundersSapphire => "Founders Sapphire",
            IboLevel::Emerald => "Emerald",
            IboLevel::FoundersEmerald => "Founders Emerald",
            IboLevel::Diamond => "Diamond",
            IboLevel::FoundersDiamond => "Founders Diamond",
            IboLevel::ExecutiveDiamond => "Executive Diamond",
            IboLevel::FoundersExecutiveDiamond => "Founders Executive Diamond",
            IboLevel::DoubleDiamond => "Double Diamond",
            IboLevel::FoundersDoubleDiamond => "Founders Double Diamond",
            IboLevel::TripleDiamond => "Triple Diamond",
            IboLevel::FoundersTripleDiamond => "Founders Triple Diamond",
            IboLevel::Crown => "Crown",
            IboLevel::FoundersCrown => "Founders Crown",
            IboLevel::CrownAmbassador => "Crown Ambassador",
            IboLevel::FoundersCrownAmbassador => "Founders Crown Ambassador",
        }
    }
}

impl fmt::Display for IboLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
