pub mod config;
pub mod time_utils;
pub mod vector_math;
