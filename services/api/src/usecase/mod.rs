pub mod access_code;
pub mod credential;
pub mod post;
pub mod user;
