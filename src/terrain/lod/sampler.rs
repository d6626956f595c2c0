// ============================================
// LOD Sampler - Прореженная сетка колонок
// ============================================

use super::levels::Lod;
use crate::terrain::coord::{ChunkCoord, ChunkOutOfRange, CHUNK_SIZE};

/// Ячейка прореженной сетки
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub col: i32,
    pub row: i32,
    /// Мировые координаты опорной колонки ячейки
    pub world_x: i32,
    pub world_z: i32,
    /// Сторона ячейки в мировых единицах
    pub size: i32,
}

/// Сетка выборки чанка для заданного LOD:
/// ceil(16 / stride) колонок на ceil(16 / stride) рядов
#[derive(Clone, Copy, Debug)]
pub struct LodGrid {
    pub lod: Lod,
    pub stride: i32,
    pub cols: i32,
    pub rows: i32,
    origin_x: i32,
    origin_z: i32,
}

impl LodGrid {
    pub fn new(coord: ChunkCoord, lod: Lod) -> Result<Self, ChunkOutOfRange> {
        let stride = lod.stride();
        let cells = (CHUNK_SIZE + stride - 1) / stride;
        let (origin_x, origin_z) = coord.world_origin()?;
        Ok(Self { lod, stride, cols: cells, rows: cells, origin_x, origin_z })
    }

    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    #[inline]
    fn cell(&self, col: i32, row: i32) -> GridCell {
        GridCell {
            col,
            row,
            world_x: self.origin_x + col * self.stride,
            world_z: self.origin_z + row * self.stride,
            size: self.stride,
        }
    }

    /// Ячейки ряда слева направо
    pub fn row(&self, row: i32) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.cols).map(move |col| self.cell(col, row))
    }

    /// Все ячейки в порядке row-major (z снаружи, x внутри)
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.rows).flat_map(move |row| self.row(row))
    }
}
