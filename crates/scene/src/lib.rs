//! Scene module - the 3D board the player clicks on
//!
//! The nine tiles sit on the `z = 0` plane, 1.5 units apart, each with a thin
//! pick box. A perspective camera looks at them from `z = 4`. A mouse click
//! becomes a ray from the near plane through the cursor; the closest tile box
//! along that ray is the picked [`Pos`](tictactoe3d_types::Pos).
//!
//! # Module Structure
//!
//! - [`layout`]: fixed world positions of the tiles
//! - [`camera`]: projection, unprojection and screen rays
//! - [`ray`]: rays, ray hits and axis-aligned boxes
//! - [`collision`]: per-tile colliders and closest-hit ray tests
//! - [`picker`]: screen point to tile
//!
//! # Example
//!
//! ```
//! use tictactoe3d_scene::{Camera, Picker, ScreenViewport};
//! use tictactoe3d_types::Pos;
//!
//! let viewport = ScreenViewport::new(1000.0, 1000.0);
//! let picker = Picker::new(Camera::for_viewport(60.0, viewport));
//!
//! assert_eq!(picker.pick(500.0, 500.0, viewport), Some(Pos::CENTER));
//! ```

pub mod camera;
pub mod collision;
pub mod layout;
pub mod picker;
pub mod ray;

pub use glam;
pub use tictactoe3d_types as types;

pub use camera::{Camera, ScreenViewport};
pub use collision::{CollisionWorld, TileCollider};
pub use layout::{tile_center, TileLayout};
pub use picker::Picker;
pub use ray::{Aabb, Ray, RayHit};
