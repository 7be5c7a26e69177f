pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod prompt;
pub mod remote;
pub mod session;
pub mod summary;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
