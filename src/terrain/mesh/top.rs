// ============================================
// Top Faces - Greedy meshing верхних граней
// ============================================

use crate::terrain::generation::{color_for, HeightSource};
use crate::terrain::lod::LodGrid;

use super::buffers::GeometryBuffers;

const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Горизонтальный quad на высоте `h` от (x0, z0) до (x1, z1)
#[inline]
fn top_quad(x0: f32, z0: f32, x1: f32, z1: f32, h: f32) -> [[f32; 3]; 4] {
    [[x0, h, z0], [x0, h, z1], [x1, h, z1], [x1, h, z0]]
}

/// Верхние грани чанка. На полной детализации колонки ряда с равной
/// высотой сливаются в один quad вдоль X; на MEDIUM/LOW каждая ячейка
/// даёт свой quad размером stride x stride.
///
/// Возвращает число добавленных quad.
pub fn mesh_top_faces<H: HeightSource + ?Sized>(
    source: &H,
    grid: &LodGrid,
    out: &mut GeometryBuffers,
) -> usize {
    let merge = grid.lod.is_full();
    let mut quads = 0;

    for row in 0..grid.rows {
        let mut cells = grid
            .row(row)
            .map(|cell| (cell, source.sample(cell.world_x, cell.world_z)))
            .peekable();

        while let Some((cell, column)) = cells.next() {
            // Расширяем по X, пока высота та же
            let mut width = 1;
            if merge {
                while cells.next_if(|(_, next)| next.height == column.height).is_some() {
                    width += 1;
                }
            }

            let color = color_for(column.height, column.blend);
            let x0 = cell.world_x as f32;
            let z0 = cell.world_z as f32;
            let x1 = (cell.world_x + width * cell.size) as f32;
            let z1 = (cell.world_z + cell.size) as f32;
            out.push_quad(top_quad(x0, z0, x1, z1, column.height as f32), UP, color);

            quads += 1;
        }
    }

    quads
}
