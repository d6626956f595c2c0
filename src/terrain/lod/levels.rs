// ============================================
// LOD Levels - Уровни детализации
// ============================================

use std::fmt;

use serde::{Deserialize, Serialize};

/// Уровень детализации чанка. На проводе - целое 0, 1 или 2.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Lod {
    Full = 0,
    Medium = 1,
    Low = 2,
}

impl Lod {
    pub const ALL: [Lod; 3] = [Lod::Full, Lod::Medium, Lod::Low];

    /// Шаг выборки колонок: 2^lod
    #[inline]
    pub fn stride(self) -> i32 {
        1 << (self as u8)
    }

    /// Слияние и боковые грани только на полной детализации
    #[inline]
    pub fn is_full(self) -> bool {
        self == Lod::Full
    }

    pub fn level(self) -> u8 {
        self as u8
    }
}

/// Неизвестный номер LOD
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidLod(pub u8);

impl fmt::Display for InvalidLod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid lod level {} (expected 0, 1 or 2)", self.0)
    }
}

impl std::error::Error for InvalidLod {}

impl TryFrom<u8> for Lod {
    type Error = InvalidLod;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Lod::Full),
            1 => Ok(Lod::Medium),
            2 => Ok(Lod::Low),
            other => Err(InvalidLod(other)),
        }
    }
}

impl From<Lod> for u8 {
    fn from(lod: Lod) -> u8 {
        lod as u8
    }
}
