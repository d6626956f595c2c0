// ============================================
// Terrain Module - Процедурная генерация чанков
// ============================================

pub mod cache;
pub mod coord;
pub mod generation;
pub mod lod;
pub mod mesh;

// Re-exports
pub use coord::{ChunkCoord, ChunkOutOfRange, CHUNK_SIZE, MAX_CHUNK_COORD};
pub use generation::{get_height, ColumnSample, HeightSource, TerrainHeightField, TerrainParams};
pub use lod::Lod;
pub use mesh::{build_chunk, generate_chunk, ChunkMesh, GeometryBuffers};
