//! Decorative particle layers for a web page.
//!
//! Two independent canvases are animated every display frame:
//! - An ambient field of slow, bouncing nodes joined by fading proximity lines
//! - A cursor layer spawning rotating confetti while the pointer moves, and
//!   expanding ripples on click or tap
//!
//! Both layers follow the window size. The ambient field switches palettes
//! when the light/dark theme changes, keeping its particles in motion.
//!
//! # Example
//!
//! ```ignore
//! use particle_veil::{CursorParticles, ParticleBackground, ThemeMode, ThemeToggle};
//!
//! let theme = RwSignal::new(ThemeMode::Light);
//! view! {
//!     <ParticleBackground theme=theme />
//!     <CursorParticles />
//!     <ThemeToggle theme=theme />
//! }
//! ```

mod component;
pub mod config;
pub mod cursor;
pub mod driver;
pub mod field;
pub mod palette;
pub mod proximity;
pub mod random;
pub mod ripple;
pub mod surface;
pub mod theme;
pub mod viewport;

pub use component::{CursorParticles, ParticleBackground, ThemeToggle};
pub use config::EngineConfig;
pub use theme::ThemeMode;
