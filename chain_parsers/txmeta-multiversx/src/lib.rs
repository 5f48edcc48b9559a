//! MultiversX transaction metadata decoder.
//!
//! Turns a raw transaction record (sender, receiver, base64 payload,
//! value) into normalized metadata describing what the transaction
//! actually does: a plain transfer, a contract call, or one of the token
//! transfer conventions (ESDT, NFT/SFT, multi-transfer), with relayed
//! transactions unwrapped recursively. Decoding is pure and infallible:
//! malformed input degrades to the plainest consistent interpretation
//! instead of erroring.

pub mod address;
pub mod codec;
mod recognizers;
mod resolver;

pub use resolver::TRANSFER_FUNCTION_NAME;
pub use txmeta::{
    TransactionMetadata, TransactionMetadataTransfer, TransactionParseError, TransactionToDecode,
    TransferProperties,
};

/// Stateless decoder for raw MultiversX transactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionDecoder;

impl TransactionDecoder {
    /// Decode a transaction record, trying each transfer recognizer in
    /// priority order on the resolved metadata. First match wins.
    pub fn get_transaction_metadata(
        &self,
        transaction: &TransactionToDecode,
    ) -> TransactionMetadata {
        let metadata = resolver::resolve(transaction);

        for recognizer in recognizers::all_recognizers() {
            if let Some(recognized) = recognizer.recognize(&metadata) {
                return recognized;
            }
        }

        metadata
    }
}

// Public API functions
pub fn transaction_to_metadata(transaction: &TransactionToDecode) -> TransactionMetadata {
    TransactionDecoder.get_transaction_metadata(transaction)
}

pub fn transaction_json_to_metadata(
    record: &str,
) -> Result<TransactionMetadata, TransactionParseError> {
    let transaction = TransactionToDecode::from_json(record)?;
    Ok(transaction_to_metadata(&transaction))
}
