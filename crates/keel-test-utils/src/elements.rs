//! Plain element types used as container payloads.

use std::fmt;

/// A three-component vector that converts from one scalar (splat) or
/// from an `(x, y, z)` tuple, mirroring constructor overloads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }
}

impl From<f32> for Vec3 {
    fn from(v: f32) -> Self {
        Self::splat(v)
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

/// A heap-owning value with no `Clone` impl.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveOnly(Box<u64>);

impl MoveOnly {
    pub fn new(v: u64) -> Self {
        Self(Box::new(v))
    }

    pub fn get(&self) -> u64 {
        *self.0
    }
}
