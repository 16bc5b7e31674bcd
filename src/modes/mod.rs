pub mod normalize;
pub mod reverse;
