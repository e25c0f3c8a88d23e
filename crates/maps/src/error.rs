use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::provider::MapKind;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Unknown map type: {0}")]
    UnknownProvider(String),

    #[error("Map is not installed on a device")]
    NotAvailable(MapKind),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Failed to launch {0}: {1}")]
    LaunchFailed(MapKind, String),

    #[error("Method {0} is not implemented")]
    NotImplemented(String),
}

impl MapError {
    /// Stable wire code the application layer can branch on.
    pub fn code(&self) -> &'static str {
        match self {
            MapError::UnknownProvider(_) => "UNKNOWN_MAP_TYPE",
            MapError::NotAvailable(_) => "MAP_NOT_AVAILABLE",
            MapError::InvalidArguments(_) => "INVALID_ARGUMENTS",
            MapError::LaunchFailed(_, _) => "LAUNCH_FAILED",
            MapError::NotImplemented(_) => "NOT_IMPLEMENTED",
        }
    }
}

// Ships over the channel as `{code, message}` so the UI can react to the
// code without parsing the message.
impl Serialize for MapError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("MapError", 2)?;
        s.serialize_field("code", self.code())?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}

pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_available_keeps_original_wording() {
        let err = MapError::NotAvailable(MapKind::Waze);
        assert_eq!(err.to_string(), "Map is not installed on a device");
        assert_eq!(err.code(), "MAP_NOT_AVAILABLE");
    }

    #[test]
    fn test_serializes_as_code_and_message() {
        let err = MapError::UnknownProvider("here".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNKNOWN_MAP_TYPE");
        assert_eq!(json["message"], "Unknown map type: here");
    }
}
