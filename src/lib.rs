//! Voxel-space terrain renderer.
//!
//! The classic heightmap ray-caster: per screen column, march a ray across
//! a 2-D elevation grid, project each sample to a screen row and paint
//! upward-only spans from near to far. Two small byte grids and a palette
//! are enough for a full landscape flyover.
//!
//! * [`world`] — terrain grids, camera pose, palette.
//! * [`sim`] — held-control set and the per-frame pose translator.
//! * [`renderer`] — frustum sweep, column marcher, frame orchestrator.
//! * [`assets`] — map loading and the procedural fallback terrain.

pub mod assets;
pub mod renderer;
pub mod sim;
pub mod world;
