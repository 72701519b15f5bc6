// Wire-format request and response models
pub mod common;
pub mod items;
