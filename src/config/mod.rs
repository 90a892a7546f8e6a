//! Configuration module

pub mod colors;
pub mod contact;
pub mod pages;
mod site;
pub mod stack;

pub use contact::{ContactConfig, ContactType};
pub use pages::{LinkEntry, LinkPage};
pub use site::SiteConfig;
pub use stack::{Stack, StackInfo, WORK_STACK};
