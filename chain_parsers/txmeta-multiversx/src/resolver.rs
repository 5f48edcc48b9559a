//! Resolves a raw transaction into its normal (relay-unwrapped) metadata.
//!
//! The payload is split on the `@` byte into a function name plus hex
//! arguments, the plain-transfer override is applied, and relayed
//! transactions are unwrapped recursively. Malformed relay payloads never
//! fail the resolution; they degrade to the un-relayed interpretation.

use num_bigint::BigUint;
use serde_json::Value;
use tracing::debug;
use txmeta::{TransactionMetadata, TransactionToDecode};

use crate::{address, codec};

/// Sentinel function name for plain value transfers.
pub const TRANSFER_FUNCTION_NAME: &str = "transfer";

const RELAYED_V1_FUNCTION_NAME: &str = "relayedTx";
const RELAYED_V2_FUNCTION_NAME: &str = "relayedTxV2";

/// Relay nesting seen on chain is one or two levels; the guard only
/// bounds recursion on adversarial payloads.
const MAX_RELAY_DEPTH: usize = 8;

/// How a payload reads once split on the `@` byte.
enum CallShape {
    /// No payload at all: a plain value transfer.
    PlainTransfer,
    /// First segment plus zero or more well-formed hex arguments.
    Call { name: String, args: Vec<String> },
    /// Undecodable, or at least one segment is not a whole-bytes hex
    /// string; the payload does not read as a call.
    Opaque,
}

pub(crate) fn resolve(transaction: &TransactionToDecode) -> TransactionMetadata {
    resolve_at_depth(transaction, 0)
}

fn resolve_at_depth(transaction: &TransactionToDecode, depth: usize) -> TransactionMetadata {
    let mut metadata = TransactionMetadata {
        sender: transaction.sender.clone(),
        receiver: transaction.receiver.clone(),
        value: parse_value(&transaction.value),
        ..TransactionMetadata::default()
    };

    match classify(transaction) {
        CallShape::PlainTransfer => {
            metadata.function_name = Some(TRANSFER_FUNCTION_NAME.to_string());
            return metadata;
        }
        CallShape::Call { name, args } => {
            // A bare, argument-less first segment sent to a plain wallet
            // is a value-transfer memo by convention. Sent to a contract
            // it stays a call, with an empty argument list.
            if args.is_empty() && !address::is_smart_contract(&transaction.receiver) {
                metadata.function_name = Some(TRANSFER_FUNCTION_NAME.to_string());
            } else {
                metadata.function_name = Some(name);
                metadata.function_args = Some(args);
            }
        }
        CallShape::Opaque => {}
    }

    if depth < MAX_RELAY_DEPTH {
        if let Some(inner) = unwrap_relayed(&metadata, transaction) {
            return resolve_at_depth(&inner, depth + 1);
        }
    }

    metadata
}

fn classify(transaction: &TransactionToDecode) -> CallShape {
    if transaction.data.is_empty() {
        return CallShape::PlainTransfer;
    }

    let payload = match codec::base64_decode(&transaction.data) {
        Ok(payload) => payload,
        Err(err) => {
            debug!("undecodable transaction payload: {err}");
            return CallShape::Opaque;
        }
    };

    let mut segments = payload
        .split(|&byte| byte == b'@')
        .map(codec::bytes_to_string);
    let name = segments.next().unwrap_or_default();
    let args: Vec<String> = segments.collect();

    if args.iter().all(|arg| is_smart_contract_argument(arg)) {
        CallShape::Call { name, args }
    } else {
        CallShape::Opaque
    }
}

/// A smart-contract argument is an even-length hex string (whole bytes).
fn is_smart_contract_argument(arg: &str) -> bool {
    codec::is_hex(arg) && arg.len() % 2 == 0
}

fn unwrap_relayed(
    metadata: &TransactionMetadata,
    outer: &TransactionToDecode,
) -> Option<TransactionToDecode> {
    let args = metadata.function_args.as_deref()?;
    match metadata.function_name.as_deref() {
        Some(RELAYED_V1_FUNCTION_NAME) if args.len() == 1 => {
            let inner = relayed_v1_inner(&args[0]);
            if inner.is_none() {
                debug!("malformed relayedTx payload, keeping outer metadata");
            }
            inner
        }
        Some(RELAYED_V2_FUNCTION_NAME) if args.len() == 4 => {
            let inner = relayed_v2_inner(&outer.receiver, args);
            if inner.is_none() {
                debug!("malformed relayedTxV2 payload, keeping outer metadata");
            }
            inner
        }
        _ => None,
    }
}

/// v1 relays hex-encode a JSON record whose addresses are base64 pubkeys
/// and whose value may be a JSON number or a string.
fn relayed_v1_inner(arg: &str) -> Option<TransactionToDecode> {
    let raw = hex::decode(arg).ok()?;
    let record: Value = serde_json::from_slice(&raw).ok()?;

    let value = match record.get("value")? {
        Value::Number(number) => number.to_string(),
        Value::String(value) => value.clone(),
        _ => return None,
    };
    let sender = relayed_address(record.get("sender")?)?;
    let receiver = relayed_address(record.get("receiver")?)?;
    let data = match record.get("data") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(data)) => data.clone(),
        _ => return None,
    };

    Some(TransactionToDecode {
        sender,
        receiver,
        data,
        value,
    })
}

fn relayed_address(field: &Value) -> Option<String> {
    let pubkey_hex = codec::base64_to_hex(field.as_str()?).ok()?;
    address::bech32_encode(&pubkey_hex).ok()
}

/// v2 relays pass the inner receiver, nonce, payload and signature as four
/// positional hex arguments; the relayer pays and the inner value is
/// always zero.
fn relayed_v2_inner(relayer: &str, args: &[String]) -> Option<TransactionToDecode> {
    let receiver = address::bech32_encode(&args[0]).ok()?;
    let payload = hex::decode(&args[2]).ok()?;

    Some(TransactionToDecode {
        sender: relayer.to_string(),
        receiver,
        data: codec::base64_encode(&payload),
        value: "0".to_string(),
    })
}

/// Record values are base-10 strings; anything unparsable degrades to zero.
fn parse_value(value: &str) -> BigUint {
    value.parse::<BigUint>().unwrap_or_default()
}
