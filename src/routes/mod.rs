pub mod health;
pub mod terms;
