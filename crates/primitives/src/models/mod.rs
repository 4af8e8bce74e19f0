pub mod app_config;
pub mod dtos;
pub mod entities;
