pub mod health;
pub mod teams;
