// Types describing the constructs a pattern is built from

mod error;
mod kinds;
mod quantifier;
mod settings;

// Re-export all public symbols
pub use error::*;
pub use kinds::*;
pub use quantifier::*;
pub use settings::*;
