use rayon::prelude::*;

use super::types::{BuildRequest, BuildResult};
use super::worker::handle_request;

/// Пакетная сборка - параллельно на пуле rayon. Порядок результатов
/// совпадает с порядком запросов.
pub fn build_batch(requests: &[BuildRequest]) -> Vec<BuildResult> {
    requests.par_iter().map(handle_request).collect()
}
