// src/core/mod.rs

// Everything that talks to the analysis service or describes what it returns.
// The UI only reads these types; it never builds requests itself.

/// Response shapes of `/analyze` and `/dashboard-data`.
pub mod models;

/// `ApiError`, the single error type of this module.
pub mod error;

/// The `PrivGuardApi` trait and its reqwest implementation.
pub mod client;

/// Upload form validation and multipart encoding.
pub mod upload;

/// Background submission of one upload.
pub mod uploader;

/// The dashboard polling task.
pub mod poller;

/// Human titles and handling notes for finding types.
pub mod catalog;

/// Writes an analysis result to disk as JSON.
pub mod export;
