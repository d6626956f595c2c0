// ============================================
// Terrain Params - Параметры карты высот
// ============================================

use std::fmt;

use serde::{Deserialize, Serialize};

/// Параметры генерации высот. `Default` - канонические значения мира:
/// меняя их, меняешь и сам мир, поэтому все клиенты должны совпадать.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Частота первой октавы (s), дальше 2s и 4s
    pub base_frequency: f64,
    /// Веса трёх октав
    pub octave_weights: [f64; 3],
    /// Базовая высота, прибавляется к сумме октав
    pub base_elevation: f64,
    /// Аффинный масштаб после сдвига
    pub height_scale: f64,
    /// Частота отдельного канала смешивания цвета
    pub blend_frequency: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            base_frequency: 0.05,
            octave_weights: [5.0, 2.0, 0.5],
            base_elevation: 8.0,
            height_scale: 1.5,
            blend_frequency: 0.015,
        }
    }
}

/// Ошибки загрузки параметров
#[derive(Debug)]
pub enum ParamsError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Parse(e) => write!(f, "failed to parse terrain params: {e}"),
            ParamsError::Invalid(field) => write!(f, "invalid terrain param: {field}"),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Parse(e) => Some(e),
            ParamsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        ParamsError::Parse(e)
    }
}

impl TerrainParams {
    /// Загрузить из JSON; отсутствующие поля берутся из `Default`
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        let params: TerrainParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.base_frequency.is_finite() && self.base_frequency > 0.0) {
            return Err(ParamsError::Invalid("base_frequency"));
        }
        if !(self.blend_frequency.is_finite() && self.blend_frequency > 0.0) {
            return Err(ParamsError::Invalid("blend_frequency"));
        }
        if !self.octave_weights.iter().all(|w| w.is_finite()) {
            return Err(ParamsError::Invalid("octave_weights"));
        }
        if !self.base_elevation.is_finite() {
            return Err(ParamsError::Invalid("base_elevation"));
        }
        if !(self.height_scale.is_finite() && self.height_scale > 0.0) {
            return Err(ParamsError::Invalid("height_scale"));
        }
        Ok(())
    }
}
