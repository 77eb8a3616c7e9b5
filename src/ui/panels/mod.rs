// Sentinel - ui/panels/mod.rs

pub mod analysis;
pub mod chat;
pub mod landing;
pub mod overview;
pub mod settings;
pub mod upload;
