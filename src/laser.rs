//! A laser's position and direction on the half-integer lattice.

use crate::coord::Coord;

/// `x, y` address the half-integer grid; `vx, vy` are each in `{-1, 0, +1}`,
/// with `(0, 0)` reserved for an absorbed laser.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Laser {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
}

impl Laser {
    pub const fn new(x: i32, y: i32, vx: i32, vy: i32) -> Self {
        Self { x, y, vx, vy }
    }

    #[inline]
    pub const fn position(&self) -> Coord {
        (self.x, self.y)
    }

    #[inline]
    pub const fn state(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.vx, self.vy)
    }

    #[inline]
    pub fn is_absorbed(&self) -> bool {
        self.vx == 0 && self.vy == 0
    }

    /// Advances the laser one step along its current direction.
    #[inline]
    pub fn step(&mut self) -> Coord {
        self.x += self.vx;
        self.y += self.vy;
        self.position()
    }

    #[inline]
    pub fn reflect_x(&mut self) {
        self.vx = -self.vx;
    }

    #[inline]
    pub fn reflect_y(&mut self) {
        self.vy = -self.vy;
    }

    /// A new laser at this one's current position, refracted along X.
    #[inline]
    pub fn refract_x(&self) -> Self {
        Self::new(self.x, self.y, -self.vx, self.vy)
    }

    /// A new laser at this one's current position, refracted along Y.
    #[inline]
    pub fn refract_y(&self) -> Self {
        Self::new(self.x, self.y, self.vx, -self.vy)
    }

    #[inline]
    pub fn absorb(&mut self) {
        self.vx = 0;
        self.vy = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_by_velocity() {
        let mut laser = Laser::new(1, 1, 1, 1);
        assert_eq!(laser.step(), (2, 2));
    }

    #[test]
    fn reflect_x_negates_vx_only() {
        let mut laser = Laser::new(1, 1, 1, 1);
        laser.reflect_x();
        assert_eq!((laser.vx, laser.vy), (-1, 1));
    }

    #[test]
    fn reflect_y_negates_vy_only() {
        let mut laser = Laser::new(1, 1, 1, 1);
        laser.reflect_y();
        assert_eq!((laser.vx, laser.vy), (1, -1));
    }

    #[test]
    fn refract_x_spawns_mirrored_copy_at_same_position() {
        let laser = Laser::new(1, 1, 1, 1);
        let spawned = laser.refract_x();
        assert_eq!(spawned.position(), laser.position());
        assert_eq!((spawned.vx, spawned.vy), (-1, 1));
    }

    #[test]
    fn refract_y_spawns_mirrored_copy_at_same_position() {
        let laser = Laser::new(1, 1, 1, 1);
        let spawned = laser.refract_y();
        assert_eq!(spawned.position(), laser.position());
        assert_eq!((spawned.vx, spawned.vy), (1, -1));
    }

    #[test]
    fn absorb_zeroes_velocity() {
        let mut laser = Laser::new(1, 1, 1, 1);
        laser.absorb();
        assert!(laser.is_absorbed());
    }
}
