//! # uniroute-chat
//!
//! Sends one chat request to a UniRoute server and prints the reply.
//!
//! ```no_run
//! use uniroute_chat::{run, Outcome};
//! use uniroute_config::ChatConfig;
//!
//! # async fn example() -> std::io::Result<()> {
//! let outcome = run(ChatConfig::from_env(), &mut std::io::stdout()).await?;
//! assert_eq!(outcome, Outcome::Rendered);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod client;
pub mod error;
pub mod logging;
pub mod render;
pub mod request;
pub mod response;

pub use app::{run, Outcome};
pub use client::ChatClient;
pub use error::{ChatError, Result};
pub use request::{ChatRequest, Message};
pub use response::{ChatResponse, Choice, ChoiceMessage, Usage};
