//! Static colliders and the shared contact response
//!
//! Every collider answers two questions: does a point penetrate it
//! ([`Collider::detect`]), and what plane approximates its surface at that
//! contact ([`Collider::contact_plane`]). [`Collider::resolve`] combines both
//! with the restitution/friction rule that is common to all shapes.
//!
//! A [`Contact`] can only be produced by `detect`, so plane extraction is always
//! preceded by a penetration test on the same point.

use glam::Vec3;

use crate::math::{closest_point_on_segment, magnitude, normalize_or};
use crate::particles::ParticleState;

/// Point recorded by a successful penetration test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    point: Vec3,
}

impl Contact {
    pub fn point(&self) -> Vec3 {
        self.point
    }
}

/// Local surface approximation `dot(normal, x) + d = 0`
///
/// The normal faces the free side, so `signed_distance` is negative for points
/// that have penetrated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPlane {
    pub normal: Vec3,
    pub d: f32,
}

impl ContactPlane {
    /// Plane with the given unit normal passing through `point`
    pub fn through(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            d: -normal.dot(point),
        }
    }

    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.d
    }
}

/// Coefficients shared by every collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResponse {
    pub bounce_elasticity: f32,
    pub friction_factor: f32,
}

impl CollisionResponse {
    /// Push `old` out of `plane` and damp its tangential velocity
    ///
    /// Velocity keeps its normal component: only friction is applied, there is
    /// no restitution impulse. Position is reflected with `(1 + e)`.
    pub fn apply(&self, plane: ContactPlane, old: ParticleState) -> ParticleState {
        let normal = plane.normal;
        let distance = plane.signed_distance(old.position);
        let position = old.position - (1.0 + self.bounce_elasticity) * distance * normal;

        let normal_vel = normal.dot(old.velocity) * normal;
        let tangent_vel = old.velocity - normal_vel;
        let velocity = old.velocity - self.friction_factor * tangent_vel;

        ParticleState { position, velocity }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCollider {
    pub point: Vec3,
    pub normal: Vec3,
    d: f32,
}

impl PlaneCollider {
    /// Plane through `point`; `normal` points to the side particles live on
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            point,
            normal,
            d: -normal.dot(point),
        }
    }

    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.d
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereCollider {
    pub center: Vec3,
    pub radius: f32,
}

impl SphereCollider {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleCollider {
    pub a: Vec3,
    pub b: Vec3,
    pub radius: f32,
}

impl CapsuleCollider {
    pub fn new(a: Vec3, b: Vec3, radius: f32) -> Self {
        Self { a, b, radius }
    }

    /// Point on the core segment nearest to `p`
    pub fn closest_core_point(&self, p: Vec3) -> Vec3 {
        closest_point_on_segment(p, self.a, self.b).0
    }

    /// Distance from `p` to the capsule surface, negative inside
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        magnitude(p, self.closest_core_point(p)) - self.radius
    }

    // Used when the contact lies exactly on the core segment.
    fn fallback_normal(&self) -> Vec3 {
        match (self.a - self.b).try_normalize() {
            Some(axis) => axis.any_orthonormal_vector(),
            None => Vec3::Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    Plane(PlaneCollider),
    Sphere(SphereCollider),
    Capsule(CapsuleCollider),
}

impl Collider {
    pub fn plane(point: Vec3, normal: Vec3) -> Self {
        Self::Plane(PlaneCollider::new(point, normal))
    }

    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere(SphereCollider::new(center, radius))
    }

    pub fn capsule(a: Vec3, b: Vec3, radius: f32) -> Self {
        Self::Capsule(CapsuleCollider::new(a, b, radius))
    }

    /// Penetration test for a particle moving from `prev` to `next`
    ///
    /// Only `next` is examined; touching the surface counts as a contact.
    pub fn detect(&self, _prev: Vec3, next: Vec3) -> Option<Contact> {
        let hit = match self {
            Self::Plane(plane) => plane.signed_distance(next) <= 0.0,
            Self::Sphere(sphere) => magnitude(next, sphere.center) <= sphere.radius,
            Self::Capsule(capsule) => capsule.signed_distance(next) <= 0.0,
        };
        hit.then_some(Contact { point: next })
    }

    pub fn check_collision(&self, prev: Vec3, next: Vec3) -> bool {
        self.detect(prev, next).is_some()
    }

    /// Surface plane at a contact previously returned by [`Self::detect`]
    pub fn contact_plane(&self, contact: &Contact) -> ContactPlane {
        match self {
            Self::Plane(plane) => ContactPlane {
                normal: plane.normal,
                d: plane.d,
            },
            Self::Sphere(sphere) => {
                // tangent plane through the contact point itself
                let normal = normalize_or(contact.point - sphere.center, Vec3::Y);
                ContactPlane::through(normal, contact.point)
            }
            Self::Capsule(capsule) => {
                let core = capsule.closest_core_point(contact.point);
                let normal = normalize_or(contact.point - core, capsule.fallback_normal());
                ContactPlane::through(normal, core + normal * capsule.radius)
            }
        }
    }

    /// Resolve a particle against this collider, returning its new state
    pub fn resolve(&self, old: ParticleState, response: &CollisionResponse) -> ParticleState {
        match self.detect(old.position, old.position) {
            Some(contact) => {
                let plane = self.contact_plane(&contact);
                log::trace!("contact at {} with {:?}", contact.point, plane);
                response.apply(plane, old)
            }
            None => old,
        }
    }
}
