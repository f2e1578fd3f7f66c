// src/handlers/mod.rs

pub mod admin;
pub mod applications;
pub mod auth;
pub mod coding_exam;
pub mod jobs;
pub mod profile;
pub mod recruiter_exam;
pub mod resources;
pub mod tpo;
