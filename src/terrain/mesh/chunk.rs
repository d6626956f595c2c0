use crate::terrain::cache::HeightCache;
use crate::terrain::coord::{ChunkCoord, ChunkOutOfRange};
use crate::terrain::generation::{HeightSource, TerrainHeightField};
use crate::terrain::lod::{Lod, LodGrid};

use super::buffers::GeometryBuffers;
use super::side::mesh_side_faces;
use super::top::mesh_top_faces;

/// Готовый меш чанка
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkMesh {
    pub coord: ChunkCoord,
    pub lod: Lod,
    pub buffers: GeometryBuffers,
    pub top_quads: usize,
    pub side_quads: usize,
}

impl ChunkMesh {
    pub fn vertex_count(&self) -> usize {
        self.buffers.vertex_count()
    }
}

/// Сборка меша чанка (чистая функция источника, координаты и LOD;
/// thread-safe, для параллельной обработки). Чанки дальше
/// `MAX_CHUNK_COORD` не строятся.
pub fn build_chunk<H: HeightSource + ?Sized>(
    source: &H,
    coord: ChunkCoord,
    lod: Lod,
) -> Result<ChunkMesh, ChunkOutOfRange> {
    let grid = LodGrid::new(coord, lod)?;
    let heights = HeightCache::new(source);

    // Верх + грубая оценка стенок
    let estimate = grid.cell_count() + if lod.is_full() { grid.cell_count() } else { 0 };
    let mut buffers = GeometryBuffers::with_quad_capacity(estimate);

    let top_quads = mesh_top_faces(&heights, &grid, &mut buffers);
    let side_quads = mesh_side_faces(&heights, &grid, &mut buffers);

    Ok(ChunkMesh { coord, lod, buffers, top_quads, side_quads })
}

/// Сборка чанка мира по сиду
pub fn generate_chunk(seed: &str, coord: ChunkCoord, lod: Lod) -> Result<ChunkMesh, ChunkOutOfRange> {
    build_chunk(&TerrainHeightField::new(seed), coord, lod)
}
