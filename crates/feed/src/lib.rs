pub mod client;

pub use client::{FeedClient, FeedStream};
