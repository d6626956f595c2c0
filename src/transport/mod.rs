// ============================================
// Transport Module - Запрос/ответ между клиентом и мешером
// ============================================

mod batch;
mod error;
mod pool;
mod protocol;
mod types;
mod worker;

pub use batch::build_batch;
pub use error::TransportError;
pub use pool::{PoolConfig, WorkerPool};
pub use protocol::{decode_inbound, decode_outbound, encode_result, parse_inbound, InboundMessage, OutboundMessage};
pub use types::{BuildRequest, BuildResult, BuildStatus};
pub use worker::{execute_request, handle_request, MesherWorker};
