//! Household Size Estimator - Household composition to floor area and size type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Largest head count accepted per household field.
pub const MAX_MEMBERS_PER_FIELD: u8 = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteWork {
    #[default]
    None,
    Sometimes,
    Often,
    Daily,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceNeed {
    #[default]
    None,
    Shared,
    Private,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HobbyStorage {
    #[default]
    None,
    Some,
    Many,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestStays {
    #[default]
    Rare,
    Monthly,
    Weekly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoragePreference {
    Min,
    #[default]
    Std,
    Max,
}

/// Household composition and space needs as answered in the questionnaire.
///
/// `hobby_room` and `guest_room` are follow-up answers; `None` means the
/// follow-up was not shown or not answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdProfile {
    pub adults: u8,
    #[serde(default)]
    pub children: u8,
    #[serde(default)]
    pub future_children: u8,
    #[serde(default)]
    pub remote_work: RemoteWork,
    #[serde(default)]
    pub workspace: WorkspaceNeed,
    #[serde(default)]
    pub hobby_storage: HobbyStorage,
    #[serde(default)]
    pub hobby_room: Option<bool>,
    #[serde(default)]
    pub guest_stays: GuestStays,
    #[serde(default)]
    pub guest_room: Option<bool>,
    #[serde(default)]
    pub storage: StoragePreference,
}

impl HouseholdProfile {
    /// Creates a profile with the given adult count and default answers.
    pub fn new(adults: u8) -> Self {
        Self {
            adults,
            children: 0,
            future_children: 0,
            remote_work: RemoteWork::None,
            workspace: WorkspaceNeed::None,
            hobby_storage: HobbyStorage::None,
            hobby_room: None,
            guest_stays: GuestStays::Rare,
            guest_room: None,
            storage: StoragePreference::Std,
        }
    }

    /// Current plus anticipated occupants.
    pub fn occupancy(&self) -> u32 {
        u32::from(self.adults) + u32::from(self.children) + u32::from(self.future_children)
    }

    /// Checks the answer ranges a questionnaire submission must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.adults == 0 || self.adults > MAX_MEMBERS_PER_FIELD {
            return Err(ValidationError::out_of_range(
                "adults",
                1,
                i32::from(MAX_MEMBERS_PER_FIELD),
                i32::from(self.adults),
            ));
        }
        for (field, value) in [
            ("children", self.children),
            ("future_children", self.future_children),
        ] {
            if value > MAX_MEMBERS_PER_FIELD {
                return Err(ValidationError::out_of_range(
                    field,
                    0,
                    i32::from(MAX_MEMBERS_PER_FIELD),
                    i32::from(value),
                ));
            }
        }
        Ok(())
    }
}

/// Floor area in tsubo. Invariant: `low <= mid <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorAreaRange {
    pub low: u32,
    pub high: u32,
    pub mid: u32,
}

impl FloorAreaRange {
    /// Builds a range; `mid` is the half-up rounded midpoint.
    pub fn new(low: u32, high: u32) -> Self {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        Self {
            low,
            high,
            mid: (low + high + 1) / 2,
        }
    }

    fn widened(self, low: u32, high: u32) -> Self {
        Self::new(self.low + low, self.high + high)
    }
}

/// Size category derived from the floor area midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeType {
    S,
    M,
    L,
}

impl SizeType {
    pub fn all() -> &'static [SizeType] {
        &[SizeType::S, SizeType::M, SizeType::L]
    }

    pub fn code(&self) -> &'static str {
        match self {
            SizeType::S => "S",
            SizeType::M => "M",
            SizeType::L => "L",
        }
    }
}

impl fmt::Display for SizeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Midpoints below this are S.
pub const SIZE_M_FROM: u32 = 31;

/// Midpoints at or above this are L.
pub const SIZE_L_FROM: u32 = 39;

/// Estimator from household profile to floor area and size type.
pub struct HouseholdSizeEstimator;

impl HouseholdSizeEstimator {
    /// Base range for a head count.
    pub fn base_range(occupancy: u32) -> FloorAreaRange {
        match occupancy {
            0..=2 => FloorAreaRange::new(26, 32),
            3 => FloorAreaRange::new(30, 36),
            4 => FloorAreaRange::new(34, 40),
            5 => FloorAreaRange::new(38, 46),
            _ => FloorAreaRange::new(42, 52),
        }
    }

    /// Estimates the floor area range.
    ///
    /// # Adjustments (cumulative)
    /// - Private workspace: +2 / +4
    /// - Many hobby items with a dedicated room: +3 / +6
    /// - Many hobby items without one (or unanswered): +1 / +2
    /// - Weekly guests with a guest room: +2 / +4
    /// - Maximal storage: +1 / +2
    pub fn estimate(profile: &HouseholdProfile) -> FloorAreaRange {
        let mut range = Self::base_range(profile.occupancy());

        if profile.workspace == WorkspaceNeed::Private {
            range = range.widened(2, 4);
        }

        if profile.hobby_storage == HobbyStorage::Many {
            range = if profile.hobby_room == Some(true) {
                range.widened(3, 6)
            } else {
                range.widened(1, 2)
            };
        }

        if profile.guest_stays == GuestStays::Weekly && profile.guest_room == Some(true) {
            range = range.widened(2, 4);
        }

        if profile.storage == StoragePreference::Max {
            range = range.widened(1, 2);
        }

        range
    }

    /// Classifies a midpoint: < 31 → S, 31..=38 → M, ≥ 39 → L.
    pub fn classify(mid: u32) -> SizeType {
        if mid < SIZE_M_FROM {
            SizeType::S
        } else if mid < SIZE_L_FROM {
            SizeType::M
        } else {
            SizeType::L
        }
    }
}
