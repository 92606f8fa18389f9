pub mod complex;
pub mod error;
pub mod quadratic;
pub mod roots;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use quadratic::{solve_quadratic, solve_quadratic_complex};
pub use roots::Roots;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
