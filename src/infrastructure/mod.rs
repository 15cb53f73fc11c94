pub mod entity;
pub mod logger;
pub mod opencage_geocoder;
pub mod schema;
pub mod user_repository;
