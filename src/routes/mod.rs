pub mod auth;
pub mod candidates;
pub mod company;
pub mod health;
pub mod interviews;
pub mod jobs;
