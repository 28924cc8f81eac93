pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod presets;
pub mod service;
