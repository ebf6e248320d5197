//! UI components.

pub mod particle_veil;
