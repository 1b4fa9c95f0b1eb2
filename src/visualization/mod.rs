pub mod appearance;
pub mod animation;
pub mod viewer;
