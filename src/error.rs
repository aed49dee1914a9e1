//! Error types for IFC Takeoff.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a materialized element model.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the model file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The model JSON is invalid or does not match the expected shape.
    #[error("invalid model data: {source}")]
    InvalidModel {
        #[from]
        source: serde_json::Error,
    },
}

/// Errors that can occur against the classification store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the store file from disk.
    #[error("failed to read store '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the store file to disk.
    #[error("failed to write store '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Stored records could not be serialized or deserialized.
    #[error("store serialization failed: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
