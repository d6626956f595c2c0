use std::fmt;

/// Ошибки транспортного слоя
#[derive(Debug)]
pub enum TransportError {
    /// Входящее сообщение не разобрано
    Decode(String),
    /// Исходящее сообщение не сериализовано
    Encode(String),
    /// Не удалось запустить поток воркера
    Spawn(std::io::Error),
    /// Воркер или получатель результатов закрыт
    Disconnected,
    /// Результат не пришёл за отведённое время
    Timeout,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Decode(msg) => write!(f, "failed to decode message: {msg}"),
            TransportError::Encode(msg) => write!(f, "failed to encode message: {msg}"),
            TransportError::Spawn(e) => write!(f, "failed to spawn mesher worker: {e}"),
            TransportError::Disconnected => write!(f, "mesher channel disconnected"),
            TransportError::Timeout => write!(f, "timed out waiting for build result"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Decode(e.to_string())
    }
}

impl From<std::io::Error> for TransportError {
    fn from(e: std::io::Error) -> Self {
        TransportError::Spawn(e)
    }
}
