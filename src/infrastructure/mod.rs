//! Infrastructure implementations of domain repository traits.

pub mod memory;

pub use memory::InMemorySiteInfoRepository;
