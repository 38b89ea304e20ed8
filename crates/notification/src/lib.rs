mod contact;
mod emailjs;
mod service;
pub(crate) mod template;

pub use contact::*;
pub use emailjs::*;
pub use service::*;
