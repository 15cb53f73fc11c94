pub mod location;
pub mod signup;
pub mod user;
