pub mod sign_up;
pub mod sign_up_controller;
pub mod sign_up_validation;
