// ============================================
// Mesh Module - Сборка меша чанка
// ============================================

mod buffers;
mod chunk;
mod side;
mod top;

pub use buffers::{GeometryBuffers, VERTICES_PER_QUAD};
pub use chunk::{build_chunk, generate_chunk, ChunkMesh};
pub use side::{column_side_faces, mesh_side_faces, Side};
pub use top::mesh_top_faces;
