// ============================================
// Protocol - Формат входящих/исходящих сообщений
// ============================================
//
// Входящее (JSON): {"type":"build","k":..,"cx":..,"cz":..,"seed":..,"lod":0|1|2}
// Исходящее (bincode): {k, lod, positions, normals, colors, error}
// Буферы идут сырыми байтами f32 в порядке little-endian.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::terrain::Lod;

use super::error::TransportError;
use super::types::{BuildRequest, BuildResult, BuildStatus};

const F32_BYTES: usize = std::mem::size_of::<f32>();

/// Входящее сообщение. Всё, что не "build", игнорируется.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InboundMessage {
    Build(BuildRequest),
    #[serde(other)]
    Ignored,
}

pub fn decode_inbound(text: &str) -> Result<InboundMessage, TransportError> {
    Ok(serde_json::from_str(text)?)
}

/// Запрос сборки из сообщения; неизвестные и битые сообщения молча
/// отбрасываются (только лог)
pub fn parse_inbound(text: &str) -> Option<BuildRequest> {
    match decode_inbound(text) {
        Ok(InboundMessage::Build(request)) => Some(request),
        Ok(InboundMessage::Ignored) => {
            log::debug!("ignoring non-build message");
            None
        }
        Err(e) => {
            log::warn!("dropping malformed message: {}", e);
            None
        }
    }
}

/// Исходящий кадр, заимствует буферы результата
#[derive(Serialize)]
struct OutboundFrame<'a> {
    k: &'a str,
    lod: Lod,
    #[serde(with = "serde_bytes")]
    positions: &'a [u8],
    #[serde(with = "serde_bytes")]
    normals: &'a [u8],
    #[serde(with = "serde_bytes")]
    colors: &'a [u8],
    error: Option<&'a str>,
}

/// Исходящее сообщение на стороне получателя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub k: String,
    pub lod: Lod,
    #[serde(with = "serde_bytes")]
    pub positions: Vec<u8>,
    #[serde(with = "serde_bytes")]
    pub normals: Vec<u8>,
    #[serde(with = "serde_bytes")]
    pub colors: Vec<u8>,
    pub error: Option<String>,
}

/// Байты f32 в little-endian. На little-endian платформе это просто
/// bytemuck-каст без копии.
fn le_bytes(values: &[f32]) -> Cow<'_, [u8]> {
    if cfg!(target_endian = "little") {
        Cow::Borrowed(bytemuck::cast_slice(values))
    } else {
        Cow::Owned(values.iter().flat_map(|v| v.to_le_bytes()).collect())
    }
}

/// Сериализовать результат
pub fn encode_result(result: &BuildResult) -> Result<Vec<u8>, TransportError> {
    let error = match &result.status {
        BuildStatus::Ok => None,
        BuildStatus::Failed(reason) => Some(reason.as_str()),
    };
    let positions = le_bytes(&result.positions);
    let normals = le_bytes(&result.normals);
    let colors = le_bytes(&result.colors);
    let frame = OutboundFrame {
        k: &result.key,
        lod: result.lod,
        positions: &positions,
        normals: &normals,
        colors: &colors,
        error,
    };
    bincode::serialize(&frame).map_err(|e| TransportError::Encode(e.to_string()))
}

pub fn decode_outbound(bytes: &[u8]) -> Result<OutboundMessage, TransportError> {
    bincode::deserialize(bytes).map_err(|e| TransportError::Decode(e.to_string()))
}

fn floats_from_bytes(bytes: &[u8]) -> Result<Vec<f32>, TransportError> {
    if bytes.len() % F32_BYTES != 0 {
        return Err(TransportError::Decode(format!(
            "payload of {} bytes is not a whole number of f32",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(F32_BYTES)
        .map(|chunk| f32::from_le_bytes(bytemuck::pod_read_unaligned(chunk)))
        .collect())
}

impl OutboundMessage {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Обратно в `BuildResult`
    pub fn into_result(self) -> Result<BuildResult, TransportError> {
        let status = match self.error {
            None => BuildStatus::Ok,
            Some(reason) => BuildStatus::Failed(reason),
        };
        Ok(BuildResult {
            positions: floats_from_bytes(&self.positions)?,
            normals: floats_from_bytes(&self.normals)?,
            colors: floats_from_bytes(&self.colors)?,
            key: self.k,
            lod: self.lod,
            status,
        })
    }
}
