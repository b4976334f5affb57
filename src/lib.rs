//! Fixed-capacity sliding token window for order-N Markov chains.
//!
//! ```
//! use markov_window::Window;
//!
//! let mut window = Window::new(3);
//! for token in "the quick fox jumps".split_whitespace() {
//!     window.push_back(token);
//! }
//! assert_eq!(window.to_string(), "quick fox jumps");
//! ```

pub mod config;
pub mod error;
pub mod window;

pub use config::WindowConfig;
pub use error::WindowError;
pub use window::{token_hash, Window};
