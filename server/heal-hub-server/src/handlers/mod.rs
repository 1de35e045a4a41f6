pub mod health;
pub mod symptoms;
