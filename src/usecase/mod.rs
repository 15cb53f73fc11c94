pub mod get_user_usecase;
pub mod signup_usecase;
