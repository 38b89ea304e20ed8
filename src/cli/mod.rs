mod migrate;
mod owner;
mod server;

pub use migrate::*;
pub use owner::*;
pub use server::*;
