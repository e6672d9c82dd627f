//! Route handlers.
//!
//! Each handler is a stateless function of its request; there is no shared
//! mutable state between requests.

pub mod echo;
pub mod health;
pub mod hello;

pub use echo::echo;
pub use health::health;
pub use hello::hello;
