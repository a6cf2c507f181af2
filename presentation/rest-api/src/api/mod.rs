pub mod error;
pub mod health;
pub mod home;
pub mod product;
pub mod tags;
pub mod view;
