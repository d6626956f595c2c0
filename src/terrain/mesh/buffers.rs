// ============================================
// Geometry Buffers - Три параллельных буфера
// ============================================
//
// Неиндексированный "triangle soup": каждый треугольник несёт свои
// три вершины целиком, quad = 2 треугольника = 6 вершин.

/// Компонент на вершину (x, y, z)
const COMPONENTS: usize = 3;
/// Вершин на quad
pub const VERTICES_PER_QUAD: usize = 6;

/// Порядок обхода углов quad: два треугольника с общей диагональю 0-2
const QUAD_ORDER: [usize; VERTICES_PER_QUAD] = [0, 1, 2, 0, 2, 3];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub colors: Vec<f32>,
}

impl GeometryBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Буферы с местом под `quads` граней
    pub fn with_quad_capacity(quads: usize) -> Self {
        let floats = quads * VERTICES_PER_QUAD * COMPONENTS;
        Self {
            positions: Vec::with_capacity(floats),
            normals: Vec::with_capacity(floats),
            colors: Vec::with_capacity(floats),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / COMPONENTS
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertex_count() / VERTICES_PER_QUAD
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Добавить quad. Углы идут против часовой стрелки, если смотреть
    /// со стороны нормали.
    #[inline]
    pub fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3], color: [f32; 3]) {
        for &i in &QUAD_ORDER {
            self.positions.extend_from_slice(&corners[i]);
            self.normals.extend_from_slice(&normal);
            self.colors.extend_from_slice(&color);
        }
    }

    /// Нормаль вершины `index`
    pub fn normal(&self, index: usize) -> [f32; 3] {
        let o = index * COMPONENTS;
        [self.normals[o], self.normals[o + 1], self.normals[o + 2]]
    }

    /// Буферы согласованы: равные длины, кратны 9
    pub fn is_consistent(&self) -> bool {
        let len = self.positions.len();
        len == self.normals.len() && len == self.colors.len() && len % 9 == 0
    }

    /// Разобрать на (positions, normals, colors) без копирования
    pub fn into_parts(self) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        (self.positions, self.normals, self.colors)
    }
}
