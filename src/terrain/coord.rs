// ============================================
// Chunk Coord - Идентификатор чанка
// ============================================

use std::fmt;

use serde::{Deserialize, Serialize};

/// Размер чанка в колонках по X и Z
pub const CHUNK_SIZE: i32 = 16;

/// Предел |cx| и |cz|. Мировые координаты чанка и его соседей
/// остаются в пределах 2^24 и точно представимы в f32.
pub const MAX_CHUNK_COORD: i32 = (1 << 20) - 1;

/// Чанк вне поддерживаемого диапазона координат
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkOutOfRange(pub ChunkCoord);

impl fmt::Display for ChunkOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chunk ({}, {}) is outside the supported range of +/-{}",
            self.0.cx, self.0.cz, MAX_CHUNK_COORD
        )
    }
}

impl std::error::Error for ChunkOutOfRange {}

/// Координата чанка (cx, cz) в сетке чанков мира
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    pub fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    #[inline]
    pub fn is_in_range(&self) -> bool {
        let limit = MAX_CHUNK_COORD.unsigned_abs();
        self.cx.unsigned_abs() <= limit && self.cz.unsigned_abs() <= limit
    }

    /// Мировые координаты угловой колонки (min x, min z)
    #[inline]
    pub fn world_origin(&self) -> Result<(i32, i32), ChunkOutOfRange> {
        if !self.is_in_range() {
            return Err(ChunkOutOfRange(*self));
        }
        Ok((self.cx * CHUNK_SIZE, self.cz * CHUNK_SIZE))
    }

    /// Чанк, содержащий мировую колонку
    #[inline]
    pub fn containing(world_x: i32, world_z: i32) -> Self {
        Self {
            cx: world_x.div_euclid(CHUNK_SIZE),
            cz: world_z.div_euclid(CHUNK_SIZE),
        }
    }
}
