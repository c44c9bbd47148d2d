pub mod frames;
pub mod kind;
