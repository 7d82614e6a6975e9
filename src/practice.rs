use fastrand::Rng;

/// Shuffles in place with a seeded RNG; equal seeds give equal orders.
pub fn seeded_shuffle<T>(items: &mut [T], seed: u64) {
    let mut rng = Rng::with_seed(seed);
    rng.shuffle(items);
}

/// Endless drill order over a set of letters.
///
/// The order is fixed at construction by `seed` and repeats once exhausted.
#[derive(Debug, Clone)]
pub struct PracticeQueue {
    order: Vec<char>,
    cursor: usize,
}

impl PracticeQueue {
    pub fn new(letters: &[char], seed: u64) -> Self {
        let mut order = letters.to_vec();
        seeded_shuffle(&mut order, seed);
        Self { order, cursor: 0 }
    }

    pub fn order(&self) -> &[char] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Iterator for PracticeQueue {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.order.is_empty() {
            return None;
        }
        let letter = self.order[self.cursor];
        self.cursor = (self.cursor + 1) % self.order.len();
        Some(letter)
    }
}
