pub mod args;
pub mod colors;
pub mod display;
pub mod parsing;
pub mod weights;

// Re-export commonly used items
pub use args::{Args, Command};
pub use colors::ColorScheme;
pub use parsing::{parse_playlist_file, parse_weights_file};
pub use weights::{attribute_keys, default_weights};
