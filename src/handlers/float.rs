use super::traits::{check_width, list_index, DiscoveryHandler};
use crate::codec::{bits_to_int, int_to_bits, max_index, num_bits_for_range};
use crate::config::FloatGeneConfig;
use crate::error::Result;
use crate::types::{Bits, ValueDomain};

/// Floating-point property, either quantized over a range or picked from a list
///
/// Range mode spreads `2^bits` evenly spaced levels over `[min, max]`, so both
/// bounds are exactly representable. List mode stores the index of the nearest
/// list entry.
#[derive(Debug, Clone)]
pub struct FloatHandler {
    domain: ValueDomain<f64>,
    num_bits: u32,
}

impl FloatHandler {
    pub fn new(config: &FloatGeneConfig) -> Result<Self> {
        config.validate()?;

        let num_bits = match &config.domain {
            ValueDomain::Range { min, max } => config
                .bits
                .unwrap_or_else(|| num_bits_for_range(min.ceil() as i64, max.floor() as i64)),
            ValueDomain::List { values } => num_bits_for_range(0, values.len() as i64),
        };
        log::debug!("float handler: {:?}, {} bits", config.domain, num_bits);

        Ok(Self {
            domain: config.domain.clone(),
            num_bits,
        })
    }

    pub fn domain(&self) -> &ValueDomain<f64> {
        &self.domain
    }

    /// Largest index in range mode; the number of intervals between levels.
    fn levels(&self) -> i64 {
        max_index(self.num_bits)
    }
}

fn nearest_index(values: &[f64], value: f64) -> usize {
    values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (*a - value)
                .abs()
                .partial_cmp(&(*b - value).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

impl DiscoveryHandler for FloatHandler {
    type Value = f64;

    fn num_bits(&self) -> u32 {
        self.num_bits
    }

    fn pack(&self, value: &f64) -> Result<Bits> {
        let bits = match &self.domain {
            ValueDomain::Range { min, max } => {
                let levels = self.levels();
                let index = if max > min {
                    let fraction = ((*value).clamp(*min, *max) - min) / (max - min);
                    ((fraction * levels as f64).round() as i64).clamp(0, levels)
                } else {
                    0
                };
                int_to_bits(index, 0, levels, self.num_bits)
            }
            ValueDomain::List { values } => {
                let index = nearest_index(values, *value);
                if values[index] != *value {
                    log::debug!(
                        "float {} not in list, using nearest entry {}",
                        value,
                        values[index]
                    );
                }
                int_to_bits(index as i64, 0, values.len() as i64, self.num_bits)
            }
        };
        Ok(bits)
    }

    fn unpack(&self, bits: &Bits) -> Result<f64> {
        check_width(bits, self.num_bits)?;

        let value = match &self.domain {
            ValueDomain::Range { min, max } => {
                let levels = self.levels();
                let index = bits_to_int(bits, 0).clamp(0, levels);
                let value = min + (index as f64 / levels as f64) * (max - min);
                value.clamp(*min, *max)
            }
            ValueDomain::List { values } => values[list_index(bits, values.len())],
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenecodecError;

    fn bits(s: &str) -> Bits {
        s.parse().unwrap()
    }

    #[test]
    fn test_range_width_from_integer_span() {
        let handler = FloatHandler::new(&FloatGeneConfig::range(0.0, 10.0)).unwrap();
        assert_eq!(handler.num_bits(), 4);

        // fractional bounds shrink to the integer span inside them
        let handler = FloatHandler::new(&FloatGeneConfig::range(0.5, 10.5)).unwrap();
        assert_eq!(handler.num_bits(), num_bits_for_range(1, 10));

        // no integer inside the range
        let handler = FloatHandler::new(&FloatGeneConfig::range(0.2, 0.8)).unwrap();
        assert_eq!(handler.num_bits(), 1);
    }

    #[test]
    fn test_explicit_bits_override() {
        let handler = FloatHandler::new(&FloatGeneConfig::range(0.0, 1.0).with_bits(8)).unwrap();
        assert_eq!(handler.num_bits(), 8);
    }

    #[test]
    fn test_range_bounds_are_exact() {
        let handler = FloatHandler::new(&FloatGeneConfig::range(-2.0, 6.0)).unwrap();
        let n = handler.num_bits() as usize;

        assert_eq!(handler.pack(&-2.0).unwrap(), Bits::zeros(n));
        assert_eq!(handler.pack(&6.0).unwrap(), Bits::ones(n));
        assert_eq!(handler.unpack(&Bits::zeros(n)).unwrap(), -2.0);
        assert_eq!(handler.unpack(&Bits::ones(n)).unwrap(), 6.0);
    }

    #[test]
    fn test_range_pack_clamps_outside_values() {
        let handler = FloatHandler::new(&FloatGeneConfig::range(0.0, 10.0)).unwrap();
        assert_eq!(handler.pack(&-5.0).unwrap(), handler.pack(&0.0).unwrap());
        assert_eq!(handler.pack(&50.0).unwrap(), handler.pack(&10.0).unwrap());
    }

    #[test]
    fn test_range_round_trip_within_one_step() {
        let handler = FloatHandler::new(&FloatGeneConfig::range(0.0, 1.0).with_bits(10)).unwrap();
        let step = 1.0 / 1023.0;
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let decoded = handler.unpack(&handler.pack(&v).unwrap()).unwrap();
            assert!((decoded - v).abs() <= step, "{} -> {}", v, decoded);
        }
    }

    #[test]
    fn test_zero_width_range() {
        let handler = FloatHandler::new(&FloatGeneConfig::range(3.5, 3.5)).unwrap();
        assert_eq!(handler.num_bits(), 1);
        assert_eq!(handler.pack(&3.5).unwrap().as_str(), "0");
        assert_eq!(handler.unpack(&bits("0")).unwrap(), 3.5);
        assert_eq!(handler.unpack(&bits("1")).unwrap(), 3.5);
    }

    #[test]
    fn test_list_nearest_and_clamp() {
        let handler =
            FloatHandler::new(&FloatGeneConfig::list(vec![0.01, 0.1, 1.0])).unwrap();
        assert_eq!(handler.num_bits(), 2);

        assert_eq!(handler.pack(&0.1).unwrap().as_str(), "01");
        assert_eq!(handler.pack(&0.8).unwrap().as_str(), "10");
        assert_eq!(handler.pack(&-4.0).unwrap().as_str(), "00");

        assert_eq!(handler.unpack(&bits("10")).unwrap(), 1.0);
        // index 3 is past the end
        assert_eq!(handler.unpack(&bits("11")).unwrap(), 1.0);
    }

    #[test]
    fn test_list_tie_prefers_first_entry() {
        let handler = FloatHandler::new(&FloatGeneConfig::list(vec![1.0, 3.0])).unwrap();
        assert_eq!(handler.pack(&2.0).unwrap(), handler.pack(&1.0).unwrap());
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let handler = FloatHandler::new(&FloatGeneConfig::range(0.0, 10.0)).unwrap();
        assert!(matches!(
            handler.unpack(&bits("010")),
            Err(GenecodecError::LengthMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        assert!(FloatHandler::new(&FloatGeneConfig::range(1.0, 0.0)).is_err());
        assert!(FloatHandler::new(&FloatGeneConfig::list(vec![])).is_err());
    }

    #[test]
    fn test_range_span_must_be_finite() {
        assert!(matches!(
            FloatHandler::new(&FloatGeneConfig::range(-1e308, 1e308)),
            Err(GenecodecError::Configuration(_))
        ));

        let handler = FloatHandler::new(&FloatGeneConfig::range(-1e307, 1e307)).unwrap();
        let n = handler.num_bits() as usize;
        assert_eq!(handler.unpack(&Bits::zeros(n)).unwrap(), -1e307);
        assert_eq!(handler.unpack(&Bits::ones(n)).unwrap(), 1e307);
    }
}
