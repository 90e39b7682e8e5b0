pub mod candidate;
pub mod company;
pub mod interview;
pub mod job;
pub mod user;
