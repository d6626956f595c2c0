// ============================================
// Terrain Mesher - Процедурные меши чанков с LOD
// ============================================
//
// Чистая функция (seed, cx, cz, lod) -> три буфера f32
// (positions, normals, colors), плюс воркеры для сборки вне
// основного потока.

pub mod terrain;
pub mod transport;

// Re-exports
pub use terrain::{build_chunk, generate_chunk, ChunkCoord, ChunkMesh, ChunkOutOfRange, GeometryBuffers, HeightSource, Lod, TerrainHeightField};
pub use transport::{BuildRequest, BuildResult, BuildStatus, MesherWorker, TransportError, WorkerPool};
