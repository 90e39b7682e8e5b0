pub mod crypto;
pub mod token;
