//! Campus transit route finder.
//!
//! A web application that answers: "how do I get from here to there?",
//! using the fixed campus shuttle loops when both ends are on campus and an
//! external directions provider otherwise.

pub mod cache;
pub mod directions;
pub mod domain;
pub mod finder;
pub mod flights;
pub mod network;
pub mod planner;
pub mod shuttle;
pub mod web;
