use crate::error::{GenecodecError, Result};
use crate::handlers::DiscoveryHandler;
use crate::types::Bits;

/// Where each gene sits in a chromosome
///
/// Genes are contiguous, in declaration order, with no separators. Position
/// `i` starts at the sum of the widths before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromosomeLayout {
    widths: Vec<usize>,
    starts: Vec<usize>,
    total_bits: usize,
}

impl ChromosomeLayout {
    pub fn new(widths: Vec<usize>) -> Self {
        let mut starts = Vec::with_capacity(widths.len());
        let mut total_bits = 0;
        for &width in &widths {
            starts.push(total_bits);
            total_bits += width;
        }
        log::debug!(
            "chromosome layout: {} genes, {} bits, widths {:?}",
            widths.len(),
            total_bits,
            widths
        );

        Self {
            widths,
            starts,
            total_bits,
        }
    }

    pub fn from_handlers<H: DiscoveryHandler>(handlers: &[H]) -> Self {
        Self::new(handlers.iter().map(|h| h.num_bits() as usize).collect())
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Number of genes
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    fn check(&self, chromosome: &Bits) -> Result<()> {
        if chromosome.len() != self.total_bits {
            return Err(GenecodecError::length_mismatch(
                self.total_bits,
                chromosome.len(),
            ));
        }
        Ok(())
    }

    /// `(start, width)` of the gene at `pos`.
    fn span(&self, pos: usize) -> Result<(usize, usize)> {
        match (self.starts.get(pos), self.widths.get(pos)) {
            (Some(&start), Some(&width)) => Ok((start, width)),
            _ => Err(GenecodecError::type_mismatch(
                format!("gene position below {}", self.len()),
                format!("position {}", pos),
            )),
        }
    }

    /// Gene at `pos`.
    pub fn segment(&self, chromosome: &Bits, pos: usize) -> Result<Bits> {
        self.check(chromosome)?;
        let (start, width) = self.span(pos)?;
        chromosome.slice(start, width)
    }

    pub fn split(&self, chromosome: &Bits) -> Result<Vec<Bits>> {
        self.check(chromosome)?;
        self.starts
            .iter()
            .zip(&self.widths)
            .map(|(&start, &width)| chromosome.slice(start, width))
            .collect()
    }

    /// Join one gene per position, checking every width.
    pub fn assemble(&self, genes: &[Bits]) -> Result<Bits> {
        if genes.len() != self.len() {
            return Err(GenecodecError::type_mismatch(
                format!("{} genes", self.len()),
                format!("{} genes", genes.len()),
            ));
        }
        for (gene, &width) in genes.iter().zip(&self.widths) {
            if gene.len() != width {
                return Err(GenecodecError::length_mismatch(width, gene.len()));
            }
        }
        Ok(Bits::concat(genes))
    }

    /// Copy of `chromosome` with the gene at `pos` replaced.
    pub fn splice(&self, chromosome: &Bits, pos: usize, gene: &Bits) -> Result<Bits> {
        self.check(chromosome)?;
        let (start, width) = self.span(pos)?;
        if gene.len() != width {
            return Err(GenecodecError::length_mismatch(width, gene.len()));
        }

        let end = start + width;
        let parts = [
            chromosome.slice(0, start)?,
            gene.clone(),
            chromosome.slice(end, self.total_bits - end)?,
        ];
        Ok(Bits::concat(&parts))
    }
}
