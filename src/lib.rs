#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod geometry;
pub mod quiz;
pub mod ranking;
pub mod rendering;
pub use app::QuizApp;
