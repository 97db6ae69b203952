//! The ambient constellation effect behind the hero section.

pub mod field;

pub use field::{
    link_alpha, particle_count, repulsion_force, Link, Particle, ParticleField, LINK_MAX_ALPHA,
    LINK_RADIUS, MAX_PARTICLES, REPULSION_RADIUS, VELOCITY_RANGE,
};
