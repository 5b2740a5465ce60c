pub mod error;
pub mod factcheck;
pub mod health;
pub mod openapi;
pub mod page;
