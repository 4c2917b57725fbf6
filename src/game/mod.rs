// Gameplay modules

pub mod pilot;
pub mod session;
