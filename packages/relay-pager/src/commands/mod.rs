pub mod query;
pub mod sdl;
