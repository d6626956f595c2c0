// ============================================
// Height Map - Генерация карты высот
// ============================================

use super::noise::{SeedStream, Simplex2};
use super::params::TerrainParams;

/// Соль для независимого канала смешивания цвета
const BLEND_SALT: &str = ":blend";

/// Производное значение колонки, нигде не хранится
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSample {
    pub world_x: i32,
    pub world_z: i32,
    pub height: u32,
    pub blend: f32,
}

/// Источник высот колонок. Мешер вызывает его лениво и повторно,
/// поэтому реализация обязана быть чистой функцией координат.
pub trait HeightSource {
    /// Высота колонки, всегда >= 0
    fn height(&self, world_x: i32, world_z: i32) -> u32;

    /// Фактор смешивания цвета в 0.0..=1.0
    fn blend(&self, world_x: i32, world_z: i32) -> f32;

    #[inline]
    fn sample(&self, world_x: i32, world_z: i32) -> ColumnSample {
        ColumnSample {
            world_x,
            world_z,
            height: self.height(world_x, world_z),
            blend: self.blend(world_x, world_z),
        }
    }
}

/// Карта высот мира: три октавы simplex шума + отдельный канал цвета
#[derive(Clone)]
pub struct TerrainHeightField {
    elevation: Simplex2,
    blend: Simplex2,
    params: TerrainParams,
}

impl TerrainHeightField {
    pub fn new(seed: &str) -> Self {
        Self::with_params(seed, TerrainParams::default())
    }

    pub fn with_params(seed: &str, params: TerrainParams) -> Self {
        let elevation = Simplex2::new(&mut SeedStream::from_seed(seed));
        let blend_seed = format!("{seed}{BLEND_SALT}");
        let blend = Simplex2::new(&mut SeedStream::from_seed(&blend_seed));
        Self { elevation, blend, params }
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Сумма октав до округления
    #[inline]
    pub fn raw_elevation(&self, world_x: i32, world_z: i32) -> f64 {
        let x = world_x as f64;
        let z = world_z as f64;
        let s = self.params.base_frequency;
        let [w0, w1, w2] = self.params.octave_weights;

        w0 * self.elevation.sample(x * s, z * s)
            + w1 * self.elevation.sample(x * s * 2.0, z * s * 2.0)
            + w2 * self.elevation.sample(x * s * 4.0, z * s * 4.0)
    }
}

impl HeightSource for TerrainHeightField {
    #[inline]
    fn height(&self, world_x: i32, world_z: i32) -> u32 {
        let n = self.raw_elevation(world_x, world_z);
        let h = ((n + self.params.base_elevation) * self.params.height_scale).floor();
        // NaN и отрицательные значения -> 0
        if h > 0.0 { h as u32 } else { 0 }
    }

    #[inline]
    fn blend(&self, world_x: i32, world_z: i32) -> f32 {
        let f = self.params.blend_frequency;
        let n = self.blend.sample(world_x as f64 * f, world_z as f64 * f);
        let t = ((n + 1.0) * 0.5).clamp(0.0, 1.0);
        if t.is_nan() { 0.5 } else { t as f32 }
    }
}

/// Высота колонки для сида (каноничные параметры)
pub fn get_height(seed: &str, world_x: i32, world_z: i32) -> u32 {
    TerrainHeightField::new(seed).height(world_x, world_z)
}
