//! quizd - backend daemon for the quiz-progression game
//!
//! Players answer quizzes placed at spatial points inside phases, earn one
//! point per correct answer, and unlock phases, skins and badges through
//! reward conditions. State lives in SQLite; the API is served over HTTP.

pub mod config;
pub mod error;
pub mod game;
pub mod progression;
pub mod quiz;
pub mod routes;
pub mod seed;
pub mod server;
pub mod store;
