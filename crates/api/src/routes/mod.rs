pub mod accounts;
pub mod fallback;
pub mod health;
pub mod index;
pub mod metrics;
