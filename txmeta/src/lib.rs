use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod test_utils;

pub use errors::TransactionParseError;

fn default_value() -> String {
    "0".to_string()
}

/// Raw transaction record as supplied by an upstream indexer or gateway.
///
/// `data` is the base64-encoded payload (empty for plain value transfers)
/// and `value` is a base-10 decimal string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionToDecode {
    pub sender: String,
    pub receiver: String,
    #[serde(default)]
    pub data: String,
    #[serde(default = "default_value")]
    pub value: String,
}

impl Default for TransactionToDecode {
    fn default() -> Self {
        Self {
            sender: String::new(),
            receiver: String::new(),
            data: String::new(),
            value: default_value(),
        }
    }
}

impl TransactionToDecode {
    /// Parse a transaction record from the JSON shape the indexer emits.
    pub fn from_json(raw: &str) -> Result<Self, TransactionParseError> {
        serde_json::from_str(raw).map_err(|e| TransactionParseError::InvalidRecord(e.to_string()))
    }
}

/// Normalized description of what a transaction actually does.
///
/// `function_name` is present whenever the payload encodes a call (or the
/// `"transfer"` sentinel for plain value transfers); `function_args` holds
/// the unconsumed hex arguments and is only set together with
/// `function_name`. `transfers`, when present, is non-empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionMetadata {
    pub sender: String,
    pub receiver: String,
    #[serde(with = "biguint_string")]
    pub value: BigUint,
    #[serde(
        rename = "functionName",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub function_name: Option<String>,
    #[serde(
        rename = "functionArgs",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub function_args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transfers: Option<Vec<TransactionMetadataTransfer>>,
}

impl TransactionMetadata {
    pub fn to_json(&self) -> Result<String, TransactionParseError> {
        serde_json::to_string(self)
            .map_err(|e| TransactionParseError::SerializationFailed(e.to_string()))
    }
}

/// A single token movement extracted from a transaction payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionMetadataTransfer {
    #[serde(with = "biguint_string")]
    pub value: BigUint,
    pub properties: TransferProperties,
}

impl TransactionMetadataTransfer {
    pub fn fungible(token: impl Into<String>, value: BigUint) -> Self {
        Self {
            value,
            properties: TransferProperties::Fungible {
                token: token.into(),
            },
        }
    }

    pub fn non_fungible(
        collection: impl Into<String>,
        identifier: impl Into<String>,
        value: BigUint,
    ) -> Self {
        Self {
            value,
            properties: TransferProperties::NonFungible {
                collection: collection.into(),
                identifier: identifier.into(),
            },
        }
    }
}

/// What is being transferred: exactly one of a fungible token identifier
/// or a collection plus the `"COLLECTION-NONCE"` identifier of the
/// individual NFT/SFT.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TransferProperties {
    Fungible {
        token: String,
    },
    NonFungible {
        collection: String,
        identifier: String,
    },
}

/// Serialize `BigUint` values as base-10 decimal strings on the wire.
mod biguint_string {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<BigUint>()
            .map_err(|_| de::Error::custom(format!("invalid big integer: {raw}")))
    }
}
