//! ECS systems that operate on the battle world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state. It lives in components, or in the collaborators
//! the engine passes in.

pub mod animation;
pub mod cleanup;
pub mod combat;
pub mod homing;
pub mod snapshot;
