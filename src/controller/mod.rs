pub mod login_controller;

pub use login_controller::login;
