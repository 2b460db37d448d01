// Creational design patterns: Builder, Factory, Singleton.
// Each pattern module stands alone; the binaries in src/bin run one each.

pub mod builder;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod singleton;

pub mod examples {
    //! # Creational Patterns
    //!
    //! ## Builder Pattern
    //! - `TabBuilder` recipes producing `ProductBundle` tablet orders
    //!
    //! ## Factory Pattern
    //! - `ShapeFactory` mapping case-insensitive keys to `Shape` trait objects
    //!
    //! ## Singleton Pattern
    //! - `SingletonObject` behind a `OnceLock`
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin builder_pattern
    //! cargo run --bin factory_pattern
    //! cargo run --bin singleton_pattern
    //! ```
}

pub use builder::{build_lenovo_bundle, build_micromax_bundle, Item, ProductBundle, TabBuilder};
pub use config::DemoConfig;
pub use error::{ConfigError, UnknownShape};
pub use factory::{Shape, ShapeFactory, ShapeKind};
pub use singleton::{get_instance, is_initialized, SingletonObject};
