mod message;
mod owner;
mod vcard;

pub use message::*;
pub use owner::*;
pub use vcard::*;
