use serde::{Deserialize, Serialize};

use crate::terrain::{ChunkCoord, ChunkMesh, Lod};

/// Запрос на сборку чанка
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    /// Ключ корреляции, возвращается в ответе как есть
    #[serde(rename = "k")]
    pub key: String,
    pub cx: i32,
    pub cz: i32,
    pub seed: String,
    pub lod: Lod,
}

impl BuildRequest {
    pub fn new(key: impl Into<String>, coord: ChunkCoord, seed: impl Into<String>, lod: Lod) -> Self {
        Self { key: key.into(), cx: coord.cx, cz: coord.cz, seed: seed.into(), lod }
    }

    pub fn coord(&self) -> ChunkCoord {
        ChunkCoord::new(self.cx, self.cz)
    }
}

/// Итог сборки: успех или перехваченный сбой
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildStatus {
    Ok,
    Failed(String),
}

/// Результат сборки. Буферы передаются владением, без копий.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildResult {
    pub key: String,
    pub lod: Lod,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub colors: Vec<f32>,
    pub status: BuildStatus,
}

impl BuildResult {
    pub fn from_mesh(key: String, mesh: ChunkMesh) -> Self {
        let (positions, normals, colors) = mesh.buffers.into_parts();
        Self { key, lod: mesh.lod, positions, normals, colors, status: BuildStatus::Ok }
    }

    /// Пустой результат со сбоем: ответ приходит на каждый запрос
    pub fn failed(key: String, lod: Lod, reason: impl Into<String>) -> Self {
        Self {
            key,
            lod,
            positions: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            status: BuildStatus::Failed(reason.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == BuildStatus::Ok
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
