use std::io as std_io;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json;

#[derive(Debug, Clone, Copy)]
pub enum Format {
    Json,
    JsonPretty,
}

pub fn serialize<T: Serialize>(data: &T, format: Format) -> std_io::Result<Vec<u8>> {
    let result = match format {
        Format::Json => serde_json::to_vec(data),
        Format::JsonPretty => serde_json::to_vec_pretty(data),
    };
    result.map_err(|e| std_io::Error::new(std_io::ErrorKind::InvalidData, e))
}

pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> std_io::Result<T> {
    serde_json::from_slice(bytes).map_err(|e| {
        std_io::Error::new(std_io::ErrorKind::InvalidData, e)
    })
}

pub fn read<T: DeserializeOwned, R: std_io::Read>(reader: R) -> std_io::Result<T> {
    serde_json::from_reader(reader).map_err(|e| {
        std_io::Error::new(std_io::ErrorKind::InvalidData, e)
    })
}
