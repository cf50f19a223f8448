use std::path::Path;

use indexmap::IndexSet;
use log::{debug, info};

use crate::cartridge::CartridgeCache;
use crate::codec::{self, Code, Patch};
use crate::config::GenieConfig;
use crate::error::Result;
use crate::layout::FixedWindow;
use crate::random::CodeGenerator;
use crate::safer;
use crate::seek::{self, SeekOptions};

/// Entry point for every operation the command line offers
pub struct Genie {
    config: GenieConfig,
    cache: CartridgeCache,
    generator: CodeGenerator,
    layout: FixedWindow,
}

impl Genie {
    pub fn new(config: GenieConfig) -> Self {
        Genie {
            cache: CartridgeCache::new(config.cache.capacity),
            config,
            generator: CodeGenerator::new_uniform(),
            layout: FixedWindow,
        }
    }

    pub fn with_generator(mut self, generator: CodeGenerator) -> Self {
        if generator.is_predictable() {
            info!("random codes come from a seeded generator");
        }
        self.generator = generator;
        self
    }

    pub fn config(&self) -> &GenieConfig {
        &self.config
    }

    /// Seek options as configured, before any command line overrides
    pub fn default_seek_options(&self) -> SeekOptions {
        self.config.seek_options()
    }

    pub fn generate_random_code(&mut self) -> Code {
        self.generator.generate()
    }

    pub fn decode_code(&self, code: &str) -> Result<Patch> {
        codec::decode(code)
    }

    pub fn reencode(&self, code: &str, new_value: u8, new_compare: Option<u8>) -> Result<Code> {
        codec::reencode(code, new_value, new_compare)
    }

    pub fn expand_safer<P: AsRef<Path>>(&mut self, code: &str, cartridge: P) -> Result<IndexSet<Code>> {
        let code = Code::parse(code)?;
        let reader = self.cache.get(cartridge)?;
        let codes = safer::expand_safer(&code, reader, &self.layout)?;
        debug!("{} expanded to {} codes", code, codes.len());
        Ok(codes)
    }

    pub fn seek_char<P: AsRef<Path>>(
        &mut self,
        literal: u8,
        cartridge: P,
        options: &SeekOptions,
    ) -> Result<IndexSet<Code>> {
        let reader = self.cache.get(cartridge)?;
        seek::seek_char(literal, reader, &self.layout, options)
    }
}

impl Default for Genie {
    fn default() -> Self {
        Genie::new(GenieConfig::default())
    }
}
