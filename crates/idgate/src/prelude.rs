pub use idgate_core::prelude::*;

// vim: ts=4
