//! Singleton Pattern with OnceLock.
//!
//! The first call to [`get_instance`] builds the object; every later call,
//! from any thread, gets the same `&'static` reference back.

use std::sync::OnceLock;

use tracing::debug;

static INSTANCE: OnceLock<SingletonObject> = OnceLock::new();

const GREETING: &str = "Hello from Singleton object!!!";

#[derive(Debug)]
pub struct SingletonObject {
    // Keeps construction private to this module.
    _private: (),
}

impl SingletonObject {
    pub fn instance() -> &'static SingletonObject {
        INSTANCE.get_or_init(|| {
            debug!("initializing shared instance");
            SingletonObject { _private: () }
        })
    }

    pub fn message(&self) -> &'static str {
        GREETING
    }

    pub fn print_message(&self) {
        println!("{}", self.message());
    }
}

pub fn get_instance() -> &'static SingletonObject {
    SingletonObject::instance()
}

/// Whether the shared instance has been built yet. Does not build it.
pub fn is_initialized() -> bool {
    INSTANCE.get().is_some()
}

pub fn same_instance(a: &SingletonObject, b: &SingletonObject) -> bool {
    std::ptr::eq(a, b)
}

// ============================================================================
// Tests
// ============================================================================
