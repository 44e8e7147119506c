//! `trip_deck` renders a single, hand-authored trip itinerary: a day-by-day overview, the daily
//! activities, expenses, a packing checklist and the member roster, along with a fixed-rate currency
//! converter and a small set of persisted viewing preferences.

pub mod args;
pub mod carousel;
pub mod commands;
mod config;
pub mod currency;
mod error;
pub mod generator;
pub mod group;
pub mod itinerary;
pub mod model;
pub mod overview;
pub mod prefs;
pub mod render;
pub mod storage;
mod utils;
pub mod view;


pub use config::Config;
pub use error::Error;
pub use error::Result;
