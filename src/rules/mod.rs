pub mod death;
pub mod food;
pub mod tick;
