// ============================================
// Terrain Colors - Цвет вершин по высоте
// ============================================

/// Верхняя граница градиента по высоте
pub const COLOR_RAMP_HEIGHT: f32 = 24.0;

/// Низины: тёмная трава
const LOW_COLOR: [f32; 3] = [0.22, 0.42, 0.16];
/// Вершины: светлый камень
const HIGH_COLOR: [f32; 3] = [0.58, 0.55, 0.47];

/// Акцент A (сухая трава) при blend > 0.6
const ACCENT_A: [f32; 3] = [0.76, 0.70, 0.38];
/// Акцент B (мох) при blend < 0.3
const ACCENT_B: [f32; 3] = [0.16, 0.33, 0.28];

const ACCENT_A_THRESHOLD: f32 = 0.6;
const ACCENT_B_THRESHOLD: f32 = 0.3;
const ACCENT_MIX: f32 = 0.15;

#[inline(always)]
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline(always)]
fn mix(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Базовый градиент без акцентов (боковые грани)
#[inline]
pub fn base_color(height: u32) -> [f32; 3] {
    mix(LOW_COLOR, HIGH_COLOR, smoothstep(0.0, COLOR_RAMP_HEIGHT, height as f32))
}

/// Полный цвет верхней грани
#[inline]
pub fn color_for(height: u32, blend: f32) -> [f32; 3] {
    let base = base_color(height);
    if blend > ACCENT_A_THRESHOLD {
        mix(base, ACCENT_A, ACCENT_MIX)
    } else if blend < ACCENT_B_THRESHOLD {
        mix(base, ACCENT_B, ACCENT_MIX)
    } else {
        base
    }
}
