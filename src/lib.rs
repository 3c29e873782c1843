//! DingTalk robot - Lightweight group robot webhook client
//!
//! Composes typed robot messages (text, link, markdown, action card, feed
//! card) and delivers them to a group robot's webhook URL with a single
//! HTTP POST.
//!
//! ```no_run
//! use dingtalk_robot::{MessageBuilder, MessageType, RobotClient};
//!
//! # async fn demo() -> dingtalk_robot::Result<()> {
//! let robot = RobotClient::new("ACCESS_TOKEN");
//! let msg = MessageBuilder::new(MessageType::Text)
//!     .text("deploy finished")
//!     .at(vec!["13800000000".to_string()], false)
//!     .build();
//! robot.send(&msg).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod models;

pub use api::RobotClient;
pub use error::{Error, Result};
pub use models::*;
