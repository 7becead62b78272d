pub mod gather;
pub mod messages;
