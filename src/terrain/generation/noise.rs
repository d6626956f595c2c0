// ============================================
// Noise Functions - Сидированный градиентный шум
// ============================================
//
// Строковый сид -> хеш FNV-1a -> поток splitmix64 -> таблица перестановок
// для 2D simplex шума. Один и тот же сид всегда даёт один и тот же поток,
// поэтому высоты совпадают у всех клиентов.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Порядко-зависимый хеш строки сида (байты как есть)
#[inline]
pub fn hash_seed(seed: &str) -> u64 {
    seed.as_bytes()
        .iter()
        .fold(FNV_OFFSET, |hash, &byte| (hash ^ byte as u64).wrapping_mul(FNV_PRIME))
}

/// Детерминированный поток псевдослучайных чисел из сида
#[derive(Clone, Debug)]
pub struct SeedStream {
    state: u64,
}

impl SeedStream {
    pub fn from_seed(seed: &str) -> Self {
        Self { state: hash_seed(seed) }
    }

    /// splitmix64
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Равномерное число в 0..bound (bound > 0)
    #[inline]
    pub fn next_below(&mut self, bound: u32) -> u32 {
        (((self.next_u64() >> 32) * bound as u64) >> 32) as u32
    }
}

/// Скос/обратный скос для треугольной решётки simplex
const F2: f64 = 0.366_025_403_784_438_6; // (sqrt(3) - 1) / 2
const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6

const GRAD2: [[f64; 2]; 12] = [
    [1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0],
    [1.0, 0.0], [-1.0, 0.0], [1.0, 0.0], [-1.0, 0.0],
    [0.0, 1.0], [0.0, -1.0], [0.0, 1.0], [0.0, -1.0],
];

/// 2D Simplex Noise с таблицей перестановок из потока сида.
/// Значения примерно в диапазоне -1.0..1.0
#[derive(Clone)]
pub struct Simplex2 {
    perm: [u8; 512],
}

impl Simplex2 {
    pub fn new(stream: &mut SeedStream) -> Self {
        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        // Fisher-Yates
        for i in (1..256).rev() {
            let j = stream.next_below(i as u32 + 1) as usize;
            table.swap(i, j);
        }

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { perm }
    }

    pub fn from_seed(seed: &str) -> Self {
        Self::new(&mut SeedStream::from_seed(seed))
    }

    #[inline]
    fn corner(x: f64, y: f64, gradient: u8) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            return 0.0;
        }
        let g = GRAD2[gradient as usize % 12];
        let t2 = t * t;
        t2 * t2 * (g[0] * x + g[1] * y)
    }

    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;

        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Верхний или нижний треугольник ячейки
        let (i1, j1) = if x0 > y0 { (1usize, 0usize) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let p = &self.perm;

        let g0 = p[ii + p[jj] as usize];
        let g1 = p[ii + i1 + p[jj + j1] as usize];
        let g2 = p[ii + 1 + p[jj + 1] as usize];

        70.0 * (Self::corner(x0, y0, g0) + Self::corner(x1, y1, g1) + Self::corner(x2, y2, g2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SeedStream::from_seed("test-seed");
        let mut b = SeedStream::from_seed("test-seed");
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_seed_hash_is_order_sensitive() {
        assert_ne!(hash_seed("ab"), hash_seed("ba"));
        assert_ne!(hash_seed(""), hash_seed("\0"));
        assert_eq!(hash_seed(""), FNV_OFFSET);
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut stream = SeedStream::from_seed("range");
        for bound in 1..300 {
            assert!(stream.next_below(bound) < bound);
        }
    }

    #[test]
    fn test_permutation_is_a_shuffle() {
        let noise = Simplex2::from_seed("perm");
        let mut seen = [false; 256];
        for &v in &noise.perm[..256] {
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(noise.perm[..256], noise.perm[256..]);
    }

    #[test]
    fn test_simplex_bounded_and_deterministic() {
        let a = Simplex2::from_seed("bounded");
        let b = Simplex2::from_seed("bounded");
        for step in 0..2000 {
            let x = step as f64 * 0.173 - 150.0;
            let y = step as f64 * -0.091 + 40.0;
            let v = a.sample(x, y);
            assert!(v.abs() <= 1.01, "noise out of range: {v}");
            assert_eq!(v.to_bits(), b.sample(x, y).to_bits());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Simplex2::from_seed("alpha");
        let b = Simplex2::from_seed("beta");
        let differs = (0..100).any(|i| {
            let x = i as f64 * 0.37;
            a.sample(x, x * 0.5) != b.sample(x, x * 0.5)
        });
        assert!(differs);
    }
}
