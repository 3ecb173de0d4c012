//! Unit tests module
//!
//! Contains unit tests for individual functions and components.

mod matching; // literal/param precedence, no backtracking
mod params; // path + query merge
mod parameter_extraction_tests;
mod path_splitting_tests;
