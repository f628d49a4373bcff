use genecodec::codec::max_index;
use genecodec::config::{FloatGeneConfig, GeneConfig, IntArrayGeneConfig, StringGeneConfig};
use genecodec::{Bits, DiscoveryHandler, GenecodecError, GeneValue, Handler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn handlers() -> Vec<Handler> {
    [
        GeneConfig::Float(FloatGeneConfig::range(-1.5, 20.0)),
        GeneConfig::Float(FloatGeneConfig::range(0.0, 1.0).with_bits(12)),
        GeneConfig::Float(FloatGeneConfig::list(vec![0.001, 0.01, 0.1, 1.0, 10.0])),
        GeneConfig::IntArray(IntArrayGeneConfig { min: -3, max: 9, size: 4 }),
        GeneConfig::IntArray(IntArrayGeneConfig { min: 1, max: 1, size: 2 }),
        GeneConfig::String(StringGeneConfig::new(["linear", "rbf", "poly", "sigmoid", "precomputed"])),
    ]
    .iter()
    .map(|c| Handler::from_config(c).unwrap())
    .collect()
}

/// Every `width`-bit pattern, MSB first.
fn all_patterns(width: u32) -> Vec<Bits> {
    (0..=max_index(width))
        .map(|i| genecodec::codec::int_to_bits(i, 0, max_index(width), width))
        .collect()
}

fn assert_in_domain(handler: &Handler, value: &GeneValue) {
    match (handler, value) {
        (Handler::Float(h), GeneValue::Float(v)) => match h.domain() {
            genecodec::ValueDomain::Range { min, max } => {
                assert!(v >= min && v <= max, "{} outside [{}, {}]", v, min, max)
            }
            genecodec::ValueDomain::List { values } => assert!(values.contains(v)),
        },
        (Handler::IntArray(h), GeneValue::IntArray(v)) => assert_eq!(v.len(), h.size()),
        (Handler::StringEnum(h), GeneValue::String(v)) => assert!(h.values().contains(v)),
        (h, v) => panic!("{} handler produced {:?}", h.kind(), v),
    }
}

#[test]
fn test_every_pattern_decodes_to_a_valid_value() {
    let mut rng = StdRng::seed_from_u64(42);

    for handler in handlers() {
        let width = handler.num_bits();
        let patterns = if width <= 12 {
            all_patterns(width)
        } else {
            (0..500)
                .map(|_| {
                    let bools: Vec<bool> = (0..width).map(|_| rng.gen_bool(0.5)).collect();
                    Bits::from_bools(&bools)
                })
                .collect()
        };

        for bits in patterns {
            let value = handler.unpack(&bits).unwrap();
            assert_in_domain(&handler, &value);
        }
    }
}

#[test]
fn test_int_array_patterns_stay_within_bounds() {
    let handler = Handler::from_config(&GeneConfig::IntArray(IntArrayGeneConfig {
        min: -3,
        max: 9,
        size: 2,
    }))
    .unwrap();

    for bits in all_patterns(handler.num_bits()) {
        match handler.unpack(&bits).unwrap() {
            GeneValue::IntArray(values) => {
                assert!(values.iter().all(|v| (-3..=9).contains(v)), "{:?}", values)
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}

#[test]
fn test_extremes_decode_to_bounds() {
    let float = Handler::from_config(&GeneConfig::Float(FloatGeneConfig::range(-1.5, 20.0))).unwrap();
    let n = float.num_bits() as usize;
    assert_eq!(float.unpack(&Bits::zeros(n)).unwrap(), GeneValue::Float(-1.5));
    assert_eq!(float.unpack(&Bits::ones(n)).unwrap(), GeneValue::Float(20.0));

    let list = Handler::from_config(&GeneConfig::String(StringGeneConfig::new(["a", "b", "c"]))).unwrap();
    let n = list.num_bits() as usize;
    assert_eq!(list.unpack(&Bits::zeros(n)).unwrap(), GeneValue::String("a".into()));
    assert_eq!(list.unpack(&Bits::ones(n)).unwrap(), GeneValue::String("c".into()));

    let array = Handler::from_config(&GeneConfig::IntArray(IntArrayGeneConfig {
        min: 2,
        max: 12,
        size: 3,
    }))
    .unwrap();
    let n = array.num_bits() as usize;
    assert_eq!(array.unpack(&Bits::zeros(n)).unwrap(), GeneValue::IntArray(vec![2, 2, 2]));
    assert_eq!(array.unpack(&Bits::ones(n)).unwrap(), GeneValue::IntArray(vec![12, 12, 12]));
}

#[test]
fn test_integer_round_trip_is_exact() {
    let handler = Handler::from_config(&GeneConfig::IntArray(IntArrayGeneConfig {
        min: -3,
        max: 9,
        size: 3,
    }))
    .unwrap();

    for a in -3..=9 {
        let value = GeneValue::IntArray(vec![a, 9 - (a + 3), -3]);
        let bits = handler.pack(&value).unwrap();
        assert_eq!(bits.len(), handler.num_bits() as usize);
        assert_eq!(handler.unpack(&bits).unwrap(), value);
    }
}

#[test]
fn test_float_round_trip_within_one_step() {
    let handler = Handler::from_config(&GeneConfig::Float(FloatGeneConfig::range(-1.5, 20.0))).unwrap();
    let step = 21.5 / max_index(handler.num_bits()) as f64;

    for i in 0..=215 {
        let v = -1.5 + i as f64 * 0.1;
        match handler.unpack(&handler.pack(&GeneValue::Float(v)).unwrap()).unwrap() {
            GeneValue::Float(decoded) => assert!((decoded - v).abs() <= step, "{} -> {}", v, decoded),
            other => panic!("unexpected {:?}", other),
        }
    }
}

#[test]
fn test_num_bits_is_stable() {
    for handler in handlers() {
        let first = handler.num_bits();
        for _ in 0..10 {
            assert_eq!(handler.num_bits(), first);
        }
    }
}

#[test]
fn test_wrong_length_fails_loudly() {
    for handler in handlers() {
        let n = handler.num_bits() as usize;
        for bad in [Bits::zeros(n + 1), Bits::zeros(n - 1)] {
            assert!(matches!(
                handler.unpack(&bad),
                Err(GenecodecError::LengthMismatch { .. })
            ));
        }
    }
}
