pub mod extract;
pub mod health;
pub mod login;
pub mod register;
pub mod session;
pub mod verify;
pub mod view;
