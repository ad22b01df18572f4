pub mod types;
pub mod calendar;
pub mod resolve;
pub mod presets;

#[cfg(test)]
mod tests;

pub use types::*;
pub use calendar::*;
pub use resolve::*;
pub use presets::*;
