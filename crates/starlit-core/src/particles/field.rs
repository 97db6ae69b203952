//! Particle field simulation.
//!
//! A fixed-size set of drifting particles bound to a rectangular surface.
//! Each simulation frame moves every particle by its velocity, reflects it
//! off the surface edges, and pushes it away from the pointer when close.
//! Nearby particles are joined by fading connection lines, which produces
//! the constellation look.
//!
//! The field is headless: it never draws and never schedules itself. The
//! render-loop owner calls [`ParticleField::update`] once per frame and reads
//! back [`ParticleField::particles`] and [`ParticleField::links`]. Velocities
//! are per-frame surface units, assuming a 60 Hz frame step.

use crate::geometry::Vec2;

/// Surface area that yields one particle.
const AREA_PER_PARTICLE: f32 = 15000.0;
/// Hard cap on the particle count, keeping the all-pairs link scan bounded.
pub const MAX_PARTICLES: usize = 100;
/// Pointer interaction radius in surface units.
pub const REPULSION_RADIUS: f32 = 100.0;
/// Fraction of the pointer delta applied as displacement per frame.
const REPULSION_STRENGTH: f32 = 0.03;
/// Particles closer than this are joined by a connection line.
pub const LINK_RADIUS: f32 = 150.0;
/// Link opacity at zero distance; fades linearly to nothing at `LINK_RADIUS`.
pub const LINK_MAX_ALPHA: f32 = 0.15;
/// Initial velocity components are uniform in ±this, per axis.
pub const VELOCITY_RANGE: f32 = 0.25;

/// One drifting dot of the effect. Radius and opacity are fixed at creation
/// and only affect rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    fn random(width: f32, height: f32, rng: &mut fastrand::Rng) -> Self {
        Self {
            position: Vec2::new(rng.f32() * width, rng.f32() * height),
            velocity: Vec2::new(
                (rng.f32() - 0.5) * 2.0 * VELOCITY_RANGE,
                (rng.f32() - 0.5) * 2.0 * VELOCITY_RANGE,
            ),
            radius: rng.f32() * 2.0 + 1.0,
            opacity: rng.f32() * 0.5 + 0.2,
        }
    }
}

/// A connection line between two particles closer than [`LINK_RADIUS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    pub alpha: f32,
}

/// Particle count for a surface: one per 15000 square units, capped.
///
/// A zero-area surface yields zero particles, which leaves the whole effect
/// inert without any special casing.
pub fn particle_count(width: f32, height: f32) -> usize {
    let by_area = (width * height / AREA_PER_PARTICLE).floor() as usize;
    by_area.min(MAX_PARTICLES)
}

/// Pointer repulsion force in [0, 1]; zero at or beyond the radius, one at
/// zero distance.
pub fn repulsion_force(distance: f32) -> f32 {
    if distance < REPULSION_RADIUS {
        (REPULSION_RADIUS - distance) / REPULSION_RADIUS
    } else {
        0.0
    }
}

/// Link opacity for a pair distance, or `None` at or beyond [`LINK_RADIUS`].
pub fn link_alpha(distance: f32) -> Option<f32> {
    if distance < LINK_RADIUS {
        Some(LINK_MAX_ALPHA * (1.0 - distance / LINK_RADIUS))
    } else {
        None
    }
}

/// The simulation state: surface dimensions, the particle set, and the last
/// known pointer position.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
    rng: fastrand::Rng,
}

impl ParticleField {
    /// Create a field for a surface, generating the full particle set from
    /// the given random source. Seed the source for reproducible fields.
    pub fn new(width: f32, height: f32, rng: fastrand::Rng) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            pointer: None,
            rng,
        };
        field.regenerate();
        field
    }

    fn regenerate(&mut self) {
        let count = particle_count(self.width, self.height);
        self.particles = (0..count)
            .map(|_| Particle::random(self.width, self.height, &mut self.rng))
            .collect();
    }

    /// Adopt new surface dimensions and rebuild the particle set from
    /// scratch. Previous particle state is discarded, not migrated.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    /// Record the pointer position, in surface units relative to the
    /// top-left corner. Out-of-range values are fine; anything farther than
    /// [`REPULSION_RADIUS`] from a particle simply has no effect.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Advance the simulation one frame: move, reflect at the edges, repel
    /// from the pointer. Reflection flips the velocity sign rather than
    /// clamping, so a particle may sit outside the surface for a frame
    /// before its reversed velocity brings it back.
    pub fn update(&mut self) {
        let pointer = self.pointer;
        for particle in &mut self.particles {
            particle.position += particle.velocity;

            if particle.position.x < 0.0 || particle.position.x > self.width {
                particle.velocity.x = -particle.velocity.x;
            }
            if particle.position.y < 0.0 || particle.position.y > self.height {
                particle.velocity.y = -particle.velocity.y;
            }

            if let Some(pointer) = pointer {
                let delta = pointer - particle.position;
                let force = repulsion_force(delta.length());
                if force > 0.0 {
                    particle.position -= delta * (force * REPULSION_STRENGTH);
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Connection lines for the current particle positions. All-pairs scan;
    /// with the count capped at 100 that is at most ~5000 distance checks.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if let Some(alpha) = link_alpha(distance) {
                    links.push(Link {
                        a: a.position,
                        b: b.position,
                        alpha,
                    });
                }
            }
        }
        links
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
