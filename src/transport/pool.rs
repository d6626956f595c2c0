use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::terrain::{HeightSource, TerrainHeightField};

use super::error::TransportError;
use super::protocol::parse_inbound;
use super::types::{BuildRequest, BuildResult};
use super::worker::MesherWorker;

/// Настройки пула воркеров
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub workers: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        let workers = thread::available_parallelism().map(|n| n.get()).unwrap_or(4);
        Self { workers }
    }
}

/// Пул воркеров с общим каналом результатов. Запросы раздаются по кругу,
/// ответы приходят в любом порядке: сопоставлять только по ключу.
pub struct WorkerPool {
    workers: Vec<MesherWorker>,
    result_rx: Receiver<BuildResult>,
    next: usize,
    in_flight: usize,
}

impl WorkerPool {
    pub fn new(config: PoolConfig) -> Result<Self, TransportError> {
        Self::with_factory(config, TerrainHeightField::new)
    }

    pub fn with_factory<F, H>(config: PoolConfig, factory: F) -> Result<Self, TransportError>
    where
        F: Fn(&str) -> H + Clone + Send + 'static,
        H: HeightSource,
    {
        let (result_tx, result_rx) = channel();
        let count = config.workers.max(1);
        let workers = (0..count)
            .map(|id| MesherWorker::spawn_with(id, result_tx.clone(), factory.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("mesher pool started with {} workers", count);
        Ok(Self { workers, result_rx, next: 0, in_flight: 0 })
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Запросов отправлено, ответов ещё не получено
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn submit(&mut self, request: BuildRequest) -> Result<(), TransportError> {
        let worker = &self.workers[self.next];
        self.next = (self.next + 1) % self.workers.len();
        worker.submit(request)?;
        self.in_flight += 1;
        Ok(())
    }

    /// Принять сырое сообщение. `Ok(false)` - сообщение проигнорировано.
    pub fn handle_message(&mut self, text: &str) -> Result<bool, TransportError> {
        match parse_inbound(text) {
            Some(request) => self.submit(request).map(|_| true),
            None => Ok(false),
        }
    }

    fn received(&mut self, result: BuildResult) -> BuildResult {
        self.in_flight = self.in_flight.saturating_sub(1);
        result
    }

    pub fn try_recv(&mut self) -> Option<BuildResult> {
        match self.result_rx.try_recv() {
            Ok(result) => Some(self.received(result)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn recv(&mut self) -> Result<BuildResult, TransportError> {
        let result = self.result_rx.recv().map_err(|_| TransportError::Disconnected)?;
        Ok(self.received(result))
    }

    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<BuildResult, TransportError> {
        match self.result_rx.recv_timeout(timeout) {
            Ok(result) => Ok(self.received(result)),
            Err(RecvTimeoutError::Timeout) => Err(TransportError::Timeout),
            Err(RecvTimeoutError::Disconnected) => Err(TransportError::Disconnected),
        }
    }
}
