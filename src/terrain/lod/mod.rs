// ============================================
// LOD Module - Уровни детализации и выборка
// ============================================

mod levels;
mod sampler;

pub use levels::{InvalidLod, Lod};
pub use sampler::{GridCell, LodGrid};
