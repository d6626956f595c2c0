// ============================================
// Side Faces - Вертикальные стенки к более низким соседям
// ============================================

use crate::terrain::generation::{base_color, HeightSource};
use crate::terrain::lod::LodGrid;

use super::buffers::GeometryBuffers;

/// Направление на соседа по оси
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    NegX,
    PosX,
    NegZ,
    PosZ,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::NegX, Side::PosX, Side::NegZ, Side::PosZ];

    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Side::NegX => (-1, 0),
            Side::PosX => (1, 0),
            Side::NegZ => (0, -1),
            Side::PosZ => (0, 1),
        }
    }

    #[inline]
    pub fn normal(self) -> [f32; 3] {
        match self {
            Side::NegX => [-1.0, 0.0, 0.0],
            Side::PosX => [1.0, 0.0, 0.0],
            Side::NegZ => [0.0, 0.0, -1.0],
            Side::PosZ => [0.0, 0.0, 1.0],
        }
    }
}

/// Углы стенки колонки (x, z) на стороне `side` между y0 и y1
#[inline]
fn wall_corners(side: Side, x: f32, z: f32, y0: f32, y1: f32) -> [[f32; 3]; 4] {
    match side {
        Side::NegX => [[x, y0, z], [x, y0, z + 1.0], [x, y1, z + 1.0], [x, y1, z]],
        Side::PosX => {
            let x = x + 1.0;
            [[x, y0, z + 1.0], [x, y0, z], [x, y1, z], [x, y1, z + 1.0]]
        }
        Side::NegZ => [[x + 1.0, y0, z], [x, y0, z], [x, y1, z], [x + 1.0, y1, z]],
        Side::PosZ => {
            let z = z + 1.0;
            [[x, y0, z], [x + 1.0, y0, z], [x + 1.0, y1, z], [x, y1, z]]
        }
    }
}

/// Стенки одной колонки. Высоты соседей берутся напрямую из источника:
/// сосед может лежать в другом чанке. Стенка строится по одному блоку
/// высоты, только если сосед строго ниже.
///
/// Возвращает число добавленных quad.
pub fn column_side_faces<H: HeightSource + ?Sized>(
    source: &H,
    world_x: i32,
    world_z: i32,
    out: &mut GeometryBuffers,
) -> usize {
    let h = source.height(world_x, world_z);
    let color = base_color(h);
    let x = world_x as f32;
    let z = world_z as f32;
    let mut quads = 0;

    for side in Side::ALL {
        let (dx, dz) = side.offset();
        let neighbor = source.height(world_x + dx, world_z + dz);
        if neighbor >= h { continue; }

        let normal = side.normal();
        for y in neighbor..h {
            let corners = wall_corners(side, x, z, y as f32, (y + 1) as f32);
            out.push_quad(corners, normal, color);
            quads += 1;
        }
    }

    quads
}

/// Стенки всех колонок чанка. Только для полной детализации: на сетке
/// MEDIUM/LOW ничего не строится. Проходит каждую колонку, включая
/// слитые в один верхний quad.
pub fn mesh_side_faces<H: HeightSource + ?Sized>(
    source: &H,
    grid: &LodGrid,
    out: &mut GeometryBuffers,
) -> usize {
    if !grid.lod.is_full() {
        return 0;
    }
    let mut quads = 0;
    for cell in grid.cells() {
        quads += column_side_faces(source, cell.world_x, cell.world_z, out);
    }
    quads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::coord::ChunkCoord;
    use crate::terrain::lod::Lod;

    fn full_grid(cx: i32, cz: i32) -> LodGrid {
        LodGrid::new(ChunkCoord::new(cx, cz), Lod::Full).unwrap()
    }

    struct Flat(u32);

    impl HeightSource for Flat {
        fn height(&self, _x: i32, _z: i32) -> u32 { self.0 }
        fn blend(&self, _x: i32, _z: i32) -> f32 { 0.5 }
    }

    /// Одиночный столб высотой 5 на (3, 3), вокруг 3
    struct Pillar;

    impl HeightSource for Pillar {
        fn height(&self, x: i32, z: i32) -> u32 { if (x, z) == (3, 3) { 5 } else { 3 } }
        fn blend(&self, _x: i32, _z: i32) -> f32 { 0.5 }
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[1] * b[2] - a[2] * b[1], a[2] * b[0] - a[0] * b[2], a[0] * b[1] - a[1] * b[0]]
    }

    #[test]
    fn test_equal_neighbors_emit_no_walls() {
        let mut out = GeometryBuffers::new();
        assert_eq!(column_side_faces(&Flat(5), 0, 0, &mut out), 0);
        assert!(out.is_empty());
        assert_eq!(mesh_side_faces(&Flat(5), &full_grid(-2, 4), &mut out), 0);
    }

    #[test]
    fn test_pillar_gets_unit_segments_on_all_sides() {
        let mut out = GeometryBuffers::new();
        let quads = column_side_faces(&Pillar, 3, 3, &mut out);
        // 4 стороны x (5 - 3) блока
        assert_eq!(quads, 8);
        assert_eq!(out.vertex_count(), 48);

        // Соседи столба ниже не строят стенок в его сторону
        let mut around = GeometryBuffers::new();
        assert_eq!(column_side_faces(&Pillar, 4, 3, &mut around), 0);

        assert_eq!(mesh_side_faces(&Pillar, &full_grid(0, 0), &mut around), 8);
    }

    /// Чанк (0, 0) на высоте 6, всё за его пределами на высоте 2
    struct Plateau;

    impl HeightSource for Plateau {
        fn height(&self, x: i32, z: i32) -> u32 {
            if (0..16).contains(&x) && (0..16).contains(&z) { 6 } else { 2 }
        }
        fn blend(&self, _x: i32, _z: i32) -> f32 { 0.5 }
    }

    #[test]
    fn test_edge_walls_read_neighbors_from_next_chunk() {
        let mut out = GeometryBuffers::new();
        let quads = mesh_side_faces(&Plateau, &full_grid(0, 0), &mut out);
        // 4 края по 16 колонок, по 4 блока разницы
        assert_eq!(quads, 4 * 16 * 4);

        let mut pos_x = 0;
        for v in 0..out.vertex_count() {
            let p = &out.positions[v * 3..v * 3 + 3];
            if out.normal(v) == Side::PosX.normal() {
                // Стенка +X лежит на границе x = 16 с соседним чанком
                assert_eq!(p[0], 16.0);
                assert!((2.0..=6.0).contains(&p[1]));
                assert!((0.0..=16.0).contains(&p[2]));
                pos_x += 1;
            }
        }
        assert_eq!(pos_x, 16 * 4 * 6);

        // Соседний чанк ниже: в сторону плато стенок нет
        let mut next = GeometryBuffers::new();
        assert_eq!(mesh_side_faces(&Plateau, &full_grid(1, 0), &mut next), 0);
    }

    #[test]
    fn test_reduced_grid_emits_no_walls() {
        let mut out = GeometryBuffers::new();
        let grid = LodGrid::new(ChunkCoord::new(0, 0), Lod::Medium).unwrap();
        assert_eq!(mesh_side_faces(&Plateau, &grid, &mut out), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_wall_winding_matches_normal() {
        for side in Side::ALL {
            let c = wall_corners(side, 2.0, 5.0, 1.0, 2.0);
            let e1 = [c[1][0] - c[0][0], c[1][1] - c[0][1], c[1][2] - c[0][2]];
            let e2 = [c[2][0] - c[0][0], c[2][1] - c[0][1], c[2][2] - c[0][2]];
            let n = cross(e1, e2);
            let expected = side.normal();
            let dot = n[0] * expected[0] + n[1] * expected[1] + n[2] * expected[2];
            assert!(dot > 0.0, "{side:?} wound backwards");
        }
    }

    #[test]
    fn test_walls_sit_on_shared_boundary() {
        let mut out = GeometryBuffers::new();
        column_side_faces(&Pillar, 3, 3, &mut out);
        for v in 0..out.vertex_count() {
            let n = out.normal(v);
            let p = &out.positions[v * 3..v * 3 + 3];
            if n == Side::NegX.normal() {
                assert_eq!(p[0], 3.0);
            } else if n == Side::PosX.normal() {
                assert_eq!(p[0], 4.0);
            } else if n == Side::NegZ.normal() {
                assert_eq!(p[2], 3.0);
            } else if n == Side::PosZ.normal() {
                assert_eq!(p[2], 4.0);
            } else {
                panic!("unexpected normal {n:?}");
            }
            assert!((3.0..=5.0).contains(&p[1]));
        }
    }

    #[test]
    fn test_walls_use_base_color() {
        let mut out = GeometryBuffers::new();
        column_side_faces(&Pillar, 3, 3, &mut out);
        assert_eq!(&out.colors[0..3], &base_color(5));
    }
}
