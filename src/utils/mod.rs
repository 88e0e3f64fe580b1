pub mod debug;

pub use debug::DEBUG_MODE;
