//! Core configuration and request/response models.

pub mod config;
pub mod models;
