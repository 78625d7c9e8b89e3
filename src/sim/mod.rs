//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Wall-clock time passed in, never read
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod lifecycle;
pub mod physics;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, resolve_collisions};
pub use lifecycle::{spawn_collectible, update_lifecycle};
pub use physics::integrate_fish;
pub use snapshot::{CollectibleView, SceneSnapshot};
pub use spawn::{SpawnEntry, SpawnTable};
pub use state::{
    AmbientParticle, AmbientPool, BackgroundLayer, Boost, Collectible, CollectibleKind, Fish,
    GameEvent, GameState, Motion,
};
pub use tick::{TickInput, tick};
