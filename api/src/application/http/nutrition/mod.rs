pub mod handlers;
pub mod router;
pub mod upload;
pub mod validators;
