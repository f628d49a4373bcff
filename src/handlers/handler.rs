use super::{DiscoveryHandler, FloatHandler, IntArrayHandler, StringHandler};
use crate::config::GeneConfig;
use crate::error::{GenecodecError, Result};
use crate::types::{Bits, GeneValue};

/// Closed set of gene kinds, so a chromosome can mix them
#[derive(Debug, Clone)]
pub enum Handler {
    Float(FloatHandler),
    IntArray(IntArrayHandler),
    StringEnum(StringHandler),
}

impl Handler {
    pub fn from_config(config: &GeneConfig) -> Result<Self> {
        Ok(match config {
            GeneConfig::Float(c) => Handler::Float(FloatHandler::new(c)?),
            GeneConfig::IntArray(c) => Handler::IntArray(IntArrayHandler::new(c)?),
            GeneConfig::String(c) => Handler::StringEnum(StringHandler::new(c)?),
        })
    }

    /// Name of the `GeneValue` variant this handler accepts
    pub fn kind(&self) -> &'static str {
        match self {
            Handler::Float(_) => "float",
            Handler::IntArray(_) => "int_array",
            Handler::StringEnum(_) => "string",
        }
    }
}

impl DiscoveryHandler for Handler {
    type Value = GeneValue;

    fn num_bits(&self) -> u32 {
        match self {
            Handler::Float(h) => h.num_bits(),
            Handler::IntArray(h) => h.num_bits(),
            Handler::StringEnum(h) => h.num_bits(),
        }
    }

    fn pack(&self, value: &GeneValue) -> Result<Bits> {
        match (self, value) {
            (Handler::Float(h), GeneValue::Float(v)) => h.pack(v),
            (Handler::IntArray(h), GeneValue::IntArray(v)) => h.pack(v),
            (Handler::StringEnum(h), GeneValue::String(v)) => h.pack(v),
            (handler, value) => Err(GenecodecError::type_mismatch(handler.kind(), value.kind())),
        }
    }

    fn unpack(&self, bits: &Bits) -> Result<GeneValue> {
        Ok(match self {
            Handler::Float(h) => GeneValue::Float(h.unpack(bits)?),
            Handler::IntArray(h) => GeneValue::IntArray(h.unpack(bits)?),
            Handler::StringEnum(h) => GeneValue::String(h.unpack(bits)?),
        })
    }
}

impl From<FloatHandler> for Handler {
    fn from(h: FloatHandler) -> Self {
        Handler::Float(h)
    }
}

impl From<IntArrayHandler> for Handler {
    fn from(h: IntArrayHandler) -> Self {
        Handler::IntArray(h)
    }
}

impl From<StringHandler> for Handler {
    fn from(h: StringHandler) -> Self {
        Handler::StringEnum(h)
    }
}
