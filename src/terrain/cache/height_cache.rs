// ============================================
// Height Cache - Кэш высот на время одной сборки
// ============================================
//
// Мешер пересчитывает высоты соседей много раз (слияние + боковые грани).
// Кэш живёт ровно одну сборку и не меняет результат.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::terrain::generation::HeightSource;

pub struct HeightCache<'a, H: HeightSource + ?Sized> {
    source: &'a H,
    heights: RefCell<HashMap<(i32, i32), u32>>,
    blends: RefCell<HashMap<(i32, i32), f32>>,
}

impl<'a, H: HeightSource + ?Sized> HeightCache<'a, H> {
    pub fn new(source: &'a H) -> Self {
        Self {
            source,
            // 18x18 колонок: чанк + кольцо соседей
            heights: RefCell::new(HashMap::with_capacity(18 * 18)),
            blends: RefCell::new(HashMap::with_capacity(16 * 16)),
        }
    }

    /// Количество закэшированных высот
    pub fn len(&self) -> usize {
        self.heights.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: HeightSource + ?Sized> HeightSource for HeightCache<'_, H> {
    #[inline]
    fn height(&self, world_x: i32, world_z: i32) -> u32 {
        let key = (world_x, world_z);
        let cached = self.heights.borrow().get(&key).copied();
        if let Some(h) = cached {
            return h;
        }
        let h = self.source.height(world_x, world_z);
        self.heights.borrow_mut().insert(key, h);
        h
    }

    #[inline]
    fn blend(&self, world_x: i32, world_z: i32) -> f32 {
        let key = (world_x, world_z);
        let cached = self.blends.borrow().get(&key).copied();
        if let Some(b) = cached {
            return b;
        }
        let b = self.source.blend(world_x, world_z);
        self.blends.borrow_mut().insert(key, b);
        b
    }
}
