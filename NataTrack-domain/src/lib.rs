// NataTrack Domain
// This crate contains the business logic for the NataTrack application

// Services that implement business logic
pub mod services;

// Identity provider boundary
pub mod auth;

// Domain entities
pub mod entities;

// Re-export the blob module from nata-track-data for convenience
pub use nata_track_data::blob;
