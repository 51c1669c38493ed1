// Utils compartidos

pub mod notify;

pub use notify::*;
