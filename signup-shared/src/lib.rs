//! Models and configuration shared between the sign-up frontend and the
//! user registration API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod models;
