mod bot;

pub use bot::*;
