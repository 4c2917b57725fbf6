// Engine modules: frame timing, input, physics, view

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
