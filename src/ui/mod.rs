//! Terminal rendering for devnanny: the nanny figure and her speech balloon.

pub mod art;
pub mod balloon;

pub use art::ArtTemplate;
pub use balloon::BalloonRenderer;
