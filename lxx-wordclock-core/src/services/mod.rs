pub mod clock_service;
pub mod refresh_policy;
