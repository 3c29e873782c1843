//! Webhook delivery client

mod client;

pub use client::RobotClient;
