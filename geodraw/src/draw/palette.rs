use maybe_sync::MaybeSend;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Color;

/// Source of fill colors for saved polygons.
pub trait ColorStrategy: MaybeSend {
    /// Returns the color for the next saved polygon. Only RGB channels are used: opacity is set
    /// by the drawing configuration.
    fn next_color(&mut self) -> Color;
}

impl<T> ColorStrategy for T
where
    T: FnMut() -> Color + MaybeSend,
{
    fn next_color(&mut self) -> Color {
        self()
    }
}

/// Picks every channel uniformly at random.
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator that always produces the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorStrategy for RandomColors {
    fn next_color(&mut self) -> Color {
        Color::rgb(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

/// Repeats the given list of colors in order.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    colors: Vec<Color>,
    next: usize,
}

impl ColorCycle {
    /// Creates a new cycle. An empty list produces [`Color::BLACK`].
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            next: 0,
        }
    }
}

impl ColorStrategy for ColorCycle {
    fn next_color(&mut self) -> Color {
        if self.colors.is_empty() {
            return Color::BLACK;
        }

        let color = self.colors[self.next % self.colors.len()];
        self.next = (self.next + 1) % self.colors.len();
        color
    }
}
