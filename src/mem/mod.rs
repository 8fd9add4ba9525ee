#[cfg(feature = "hercules")]
pub mod allocator;
