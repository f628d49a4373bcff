use super::layout::ChromosomeLayout;
use crate::accessor::PropertyAccessor;
use crate::config::{ConfigSection, SearchConfig};
use crate::error::Result;
use crate::handlers::{DiscoveryHandler, Handler};
use crate::types::{Bits, GeneValue};
use rand::Rng;
use rayon::prelude::*;

/// A handler bound to the property it reads and writes
#[derive(Debug, Clone)]
pub struct GeneBinding {
    pub path: String,
    pub handler: Handler,
}

impl GeneBinding {
    pub fn new(path: impl Into<String>, handler: impl Into<Handler>) -> Self {
        Self {
            path: path.into(),
            handler: handler.into(),
        }
    }
}

/// Every searched property, in chromosome order
///
/// This is the bridge between an optimizer, which only sees flat bit strings,
/// and the target object, which only sees typed property values.
#[derive(Debug, Clone)]
pub struct SearchSpace {
    bindings: Vec<GeneBinding>,
    layout: ChromosomeLayout,
}

impl SearchSpace {
    pub fn new(bindings: Vec<GeneBinding>) -> Self {
        let layout =
            ChromosomeLayout::new(bindings.iter().map(|b| b.handler.num_bits() as usize).collect());
        Self { bindings, layout }
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        let bindings = config
            .genes
            .iter()
            .map(|g| Ok(GeneBinding::new(g.path.clone(), Handler::from_config(&g.gene)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(bindings))
    }

    pub fn bindings(&self) -> &[GeneBinding] {
        &self.bindings
    }

    pub fn layout(&self) -> &ChromosomeLayout {
        &self.layout
    }

    pub fn total_bits(&self) -> usize {
        self.layout.total_bits()
    }

    /// Pack the current value of every property into one chromosome.
    pub fn seed<A: PropertyAccessor + ?Sized>(&self, accessor: &A) -> Result<Bits> {
        let genes = self
            .bindings
            .iter()
            .map(|b| b.handler.pack(&accessor.get(&b.path)?))
            .collect::<Result<Vec<_>>>()?;
        self.layout.assemble(&genes)
    }

    pub fn decode(&self, chromosome: &Bits) -> Result<Vec<(String, GeneValue)>> {
        self.layout
            .split(chromosome)?
            .iter()
            .zip(&self.bindings)
            .map(|(gene, b)| Ok((b.path.clone(), b.handler.unpack(gene)?)))
            .collect()
    }

    /// Decode `chromosome` and write every value through `accessor`.
    pub fn apply<A: PropertyAccessor + ?Sized>(
        &self,
        chromosome: &Bits,
        accessor: &mut A,
    ) -> Result<()> {
        for (path, value) in self.decode(chromosome)? {
            log::trace!("{} <- {:?}", path, value);
            accessor.set(&path, value)?;
        }
        Ok(())
    }

    /// Decode independent chromosomes in parallel.
    pub fn decode_population(&self, chromosomes: &[Bits]) -> Result<Vec<Vec<(String, GeneValue)>>> {
        chromosomes.par_iter().map(|c| self.decode(c)).collect()
    }

    /// Uniformly random chromosome of the right width.
    pub fn random_chromosome<R: Rng + ?Sized>(&self, rng: &mut R) -> Bits {
        let bools: Vec<bool> = (0..self.total_bits()).map(|_| rng.gen_bool(0.5)).collect();
        Bits::from_bools(&bools)
    }
}
