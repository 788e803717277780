// NataTrack Data
// This crate handles persistence for readings and the user profile

// Key-value blob storage backends
pub mod blob;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
