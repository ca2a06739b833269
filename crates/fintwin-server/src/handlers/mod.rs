//! Request handlers

mod forecast;

pub use forecast::forecast;
