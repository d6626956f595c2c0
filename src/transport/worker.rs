use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{channel, Sender};
use std::thread::{self, JoinHandle};

use crate::terrain::{build_chunk, HeightSource, TerrainHeightField};

use super::error::TransportError;
use super::protocol::parse_inbound;
use super::types::{BuildRequest, BuildResult};

/// Сборка одного запроса на каноничной карте высот
pub fn handle_request(request: &BuildRequest) -> BuildResult {
    execute_request(request, &TerrainHeightField::new)
}

/// Сборка с заданной фабрикой источника высот. Сбой внутри сборки
/// перехватывается: в ответ уходит пустой результат с флагом ошибки
/// и исходным ключом.
pub fn execute_request<F, H>(request: &BuildRequest, factory: &F) -> BuildResult
where
    F: Fn(&str) -> H,
    H: HeightSource,
{
    let built = panic::catch_unwind(AssertUnwindSafe(|| {
        let source = factory(&request.seed);
        build_chunk(&source, request.coord(), request.lod)
    }));

    match built {
        Ok(Ok(mesh)) => {
            log::debug!(
                "built chunk ({}, {}) lod {} for '{}': {} vertices ({} top, {} side quads)",
                request.cx,
                request.cz,
                request.lod.level(),
                request.key,
                mesh.vertex_count(),
                mesh.top_quads,
                mesh.side_quads,
            );
            BuildResult::from_mesh(request.key.clone(), mesh)
        }
        Ok(Err(refused)) => {
            log::warn!("build '{}' refused: {}", request.key, refused);
            BuildResult::failed(request.key.clone(), request.lod, refused.to_string())
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            log::error!("build '{}' failed: {}", request.key, reason);
            BuildResult::failed(request.key.clone(), request.lod, reason)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "mesher panicked".to_string()
    }
}

/// Фоновый воркер: один поток, запросы строго по порядку поступления,
/// каждая сборка синхронно до конца
pub struct MesherWorker {
    id: usize,
    request_tx: Option<Sender<BuildRequest>>,
    handle: Option<JoinHandle<()>>,
}

impl MesherWorker {
    /// Воркер на каноничной карте высот
    pub fn spawn(id: usize, results: Sender<BuildResult>) -> Result<Self, TransportError> {
        Self::spawn_with(id, results, TerrainHeightField::new)
    }

    /// Воркер с фабрикой источника высот по сиду
    pub fn spawn_with<F, H>(id: usize, results: Sender<BuildResult>, factory: F) -> Result<Self, TransportError>
    where
        F: Fn(&str) -> H + Send + 'static,
        H: HeightSource,
    {
        let (request_tx, request_rx) = channel::<BuildRequest>();

        let handle = thread::Builder::new()
            .name(format!("mesher-worker-{id}"))
            .spawn(move || {
                log::info!("mesher worker {} started", id);
                while let Ok(request) = request_rx.recv() {
                    let result = execute_request(&request, &factory);
                    if results.send(result).is_err() {
                        break;
                    }
                }
                log::info!("mesher worker {} stopped", id);
            })?;

        Ok(Self { id, request_tx: Some(request_tx), handle: Some(handle) })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Поставить запрос в очередь воркера
    pub fn submit(&self, request: BuildRequest) -> Result<(), TransportError> {
        match &self.request_tx {
            Some(tx) => tx.send(request).map_err(|_| TransportError::Disconnected),
            None => Err(TransportError::Disconnected),
        }
    }

    /// Принять сырое сообщение. `Ok(false)` - сообщение проигнорировано.
    pub fn handle_message(&self, text: &str) -> Result<bool, TransportError> {
        match parse_inbound(text) {
            Some(request) => self.submit(request).map(|_| true),
            None => Ok(false),
        }
    }
}

impl Drop for MesherWorker {
    fn drop(&mut self) {
        // Закрываем очередь: поток доделает принятые запросы и выйдет
        self.request_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("mesher worker {} terminated abnormally", self.id);
            }
        }
    }
}
