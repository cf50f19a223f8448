use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::codec::{Code, Patch, BASE_ADDRESS};

/// RandMode controls generator behaviour. Predictable for tests, uniform otherwise
pub enum RandMode {
    Predictable,
    RandomUniform,
}

pub struct CodeGenerator {
    rng: Box<dyn RngCore>,
    rand_mode: RandMode,
}

impl CodeGenerator {
    pub fn new(rm: RandMode) -> CodeGenerator {
        CodeGenerator {
            rng: Box::new(rand::thread_rng()),
            rand_mode: rm,
        }
    }

    pub fn new_uniform() -> CodeGenerator {
        CodeGenerator::new(RandMode::RandomUniform)
    }

    pub fn new_predictable(seed: u64) -> CodeGenerator {
        CodeGenerator {
            rng: Box::new(StdRng::seed_from_u64(seed)),
            rand_mode: RandMode::Predictable,
        }
    }

    pub fn is_predictable(&self) -> bool {
        matches!(self.rand_mode, RandMode::Predictable)
    }

    /// generate draws a random address in 0x8000..=0xffff and a random value,
    /// always producing a 6 letter code
    pub fn generate(&mut self) -> Code {
        let patch = Patch {
            address: self.rng.gen_range(BASE_ADDRESS..=0xFFFF),
            value: self.rng.gen(),
            compare: None,
        };
        patch.encode()
    }
}
