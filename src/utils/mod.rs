// src/utils/mod.rs

pub mod html;
pub mod input;
pub mod jwt;
