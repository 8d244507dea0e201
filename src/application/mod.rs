/// Application layer: use cases, DTOs, and read models
pub mod dto;
pub mod read_models;
pub mod use_cases;
