// placebridge-mobile — native packaging crate for iOS and Android shells
// Re-exports the core bridge API for linking into host applications.

pub use placebridge_core::*;
