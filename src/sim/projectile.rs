//! Projectile entities: fruits and bombs
//!
//! A projectile is plain data plus three operations: an Euler integration
//! step, a square-hitbox containment test, and an exactly-once `slice`.
//! Fruits and bombs share the same motion; only the slice side effect and
//! spawn tuning differ.

use glam::Vec2;

use crate::consts::*;

/// The fixed set of fruit sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitKind {
    Apple,
    Banana,
    Orange,
    Melon,
    Watermelon,
}

impl FruitKind {
    pub const ALL: [FruitKind; 5] = [
        FruitKind::Apple,
        FruitKind::Banana,
        FruitKind::Orange,
        FruitKind::Melon,
        FruitKind::Watermelon,
    ];

    /// Sprite base name (`images/<name>.png`)
    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Banana => "banana",
            FruitKind::Orange => "orange",
            FruitKind::Melon => "melon",
            FruitKind::Watermelon => "watermelon",
        }
    }

    /// Stable index into per-kind sprite tables
    pub fn index(&self) -> usize {
        match self {
            FruitKind::Apple => 0,
            FruitKind::Banana => 1,
            FruitKind::Orange => 2,
            FruitKind::Melon => 3,
            FruitKind::Watermelon => 4,
        }
    }
}

/// What a projectile is, and therefore what slicing it does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    Fruit(FruitKind),
    Bomb,
}

/// Side effect owed to the session after a successful slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceEffect {
    /// Award the fruit score increment
    Score,
    /// End the run: a bomb was hit
    Detonate,
}

/// One airborne object following gravity-affected motion
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Per-tick downward velocity increment
    pub gravity: f32,
    pub kind: ProjectileKind,
    /// Terminal flag: a sliced projectile no longer renders or registers hits
    pub sliced: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, gravity: f32, kind: ProjectileKind) -> Self {
        Self {
            pos,
            vel,
            gravity,
            kind,
            sliced: false,
        }
    }

    /// One Euler step. Increments are per tick, not wall-clock scaled.
    ///
    /// An object that drifts past a side edge stops moving sideways and
    /// falls straight down from there.
    pub fn advance(&mut self) {
        self.vel.y += self.gravity;
        self.pos += self.vel;

        if self.pos.x < 0.0 || self.pos.x > SURFACE_WIDTH {
            self.vel.x = 0.0;
        }
    }

    /// Whether a pointer position lands in this projectile's hitbox.
    ///
    /// The hitbox is a square of half-extent [`HIT_HALF_EXTENT`] centered on
    /// the position. Sliced projectiles never register hits.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        !self.sliced
            && (px - self.pos.x).abs() < HIT_HALF_EXTENT
            && (py - self.pos.y).abs() < HIT_HALF_EXTENT
    }

    /// Mark this projectile sliced and report the side effect to apply.
    ///
    /// Idempotent: the effect is returned exactly once, so rapid successive
    /// pointer events can never double-score a fruit or double-detonate a
    /// bomb.
    pub fn slice(&mut self) -> Option<SliceEffect> {
        if self.sliced {
            return None;
        }
        self.sliced = true;
        Some(match self.kind {
            ProjectileKind::Fruit(_) => SliceEffect::Score,
            ProjectileKind::Bomb => SliceEffect::Detonate,
        })
    }

    /// True once the projectile has fallen past the bottom boundary
    pub fn past_bottom(&self) -> bool {
        self.pos.y >= SURFACE_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fruit_at(x: f32, y: f32) -> Projectile {
        Projectile::new(
            Vec2::new(x, y),
            Vec2::new(1.0, -6.0),
            0.2,
            ProjectileKind::Fruit(FruitKind::Apple),
        )
    }

    #[test]
    fn test_advance_integrates_gravity() {
        let mut p = fruit_at(150.0, 200.0);
        p.vel = Vec2::new(1.0, -6.0);
        p.gravity = 0.25;
        p.advance();
        assert_eq!(p.vel.y, -5.75);
        assert_eq!(p.pos, Vec2::new(151.0, 194.25));
    }

    #[test]
    fn test_advance_zeroes_vx_at_edges() {
        let mut p = fruit_at(299.5, 200.0);
        p.vel = Vec2::new(3.0, 0.0);
        p.gravity = 0.0;
        p.advance();
        assert_eq!(p.vel.x, 0.0);

        // Subsequent steps fall straight down
        let x = p.pos.x;
        p.advance();
        assert_eq!(p.pos.x, x);
    }

    #[test]
    fn test_slice_effect_exactly_once() {
        let mut fruit = fruit_at(0.0, 0.0);
        assert_eq!(fruit.slice(), Some(SliceEffect::Score));
        assert_eq!(fruit.slice(), None);

        let mut bomb = Projectile::new(Vec2::ZERO, Vec2::ZERO, 0.1, ProjectileKind::Bomb);
        assert_eq!(bomb.slice(), Some(SliceEffect::Detonate));
        assert_eq!(bomb.slice(), None);
    }

    #[test]
    fn test_sliced_registers_no_hits() {
        let mut p = fruit_at(150.0, 200.0);
        assert!(p.contains_point(150.0, 200.0));
        p.slice();
        assert!(!p.contains_point(150.0, 200.0));
    }

    proptest! {
        #[test]
        fn hitbox_is_the_square(px in -200.0f32..500.0, py in -200.0f32..600.0) {
            let p = fruit_at(150.0, 200.0);
            let inside = (px - 150.0).abs() < crate::consts::HIT_HALF_EXTENT
                && (py - 200.0).abs() < crate::consts::HIT_HALF_EXTENT;
            prop_assert_eq!(p.contains_point(px, py), inside);
        }

        #[test]
        fn gravity_only_accelerates_downward(g in 0.05f32..0.5, vy in -10.0f32..0.0) {
            let mut p = fruit_at(150.0, 200.0);
            p.gravity = g;
            p.vel.y = vy;
            p.advance();
            prop_assert!(p.vel.y > vy);
        }
    }
}
