pub mod app;
pub mod contact;
pub mod email;
pub mod error;
pub mod state;

#[cfg(test)]
mod test_support;

pub use error::ApiError;
