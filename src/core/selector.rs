/// Random reply selection
use super::responses::{Category, ResponseTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for reply picks and thinking delays
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform fraction in `[0, 1)`
    fn next_fraction(&mut self) -> f64;
}

/// Entropy-seeded generator used by the running app
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn next_fraction(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

pub struct ReplySelector;

impl ReplySelector {
    /// Picks one reply from the category's pool
    pub fn pick<'a>(
        table: &'a ResponseTable,
        category: Category,
        random: &mut dyn RandomSource,
    ) -> &'a str {
        let pool = table.pool(category);
        // pools are never empty, see ResponseTable::validated
        let index = random.next_index(pool.len()) % pool.len();
        &pool[index]
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedRandom;
    use super::*;

    #[test]
    fn picks_scripted_index() {
        let table = ResponseTable::builtin();
        let mut random = ScriptedRandom::new(&[2], &[]);
        let reply = ReplySelector::pick(&table, Category::Greeting, &mut random);
        assert_eq!(reply, table.pool(Category::Greeting)[2]);
    }

    #[test]
    fn system_random_stays_in_range() {
        let table = ResponseTable::builtin();
        let mut random = SystemRandom::new();
        for _ in 0..200 {
            let reply = ReplySelector::pick(&table, Category::Default, &mut random);
            assert!(table.pool(Category::Default).iter().any(|r| r == reply));
            let f = random.next_fraction();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn out_of_range_index_wraps() {
        let table = ResponseTable::builtin();
        let mut random = ScriptedRandom::new(&[7], &[]);
        let reply = ReplySelector::pick(&table, Category::How, &mut random);
        assert_eq!(reply, table.pool(Category::How)[1]);
    }
}
