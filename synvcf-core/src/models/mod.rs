pub mod config;
pub mod settings;

// re-export for cleaner imports
pub use self::config::{GeneratorConfig, GeneratorConfigBuilder, SampleIdStyle};
pub use self::settings::GeneratorSettings;
