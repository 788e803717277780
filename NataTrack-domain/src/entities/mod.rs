// Domain entities and value objects
pub mod conversions;
pub mod profile;
pub mod reading;

// Re-export common types for easier imports
pub use profile::{OnboardingRequest, ReminderFrequency, UserProfile};
pub use reading::{Category, CreateReadingRequest, Position, Reading, Ruleset, Symptom};
