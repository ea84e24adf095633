pub mod padding;
pub mod pipeline;
pub mod resize;
pub mod save;
pub mod trim;
