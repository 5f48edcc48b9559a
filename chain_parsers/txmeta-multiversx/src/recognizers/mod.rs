//! Specialized transfer recognizers.
//!
//! Each recognizer reclassifies resolved metadata as a token transfer when
//! its calling convention matches, building a fresh metadata object and
//! never mutating its input. A recognizer that does not match (or hits a
//! malformed argument) declines by returning `None`.

mod esdt;
mod multi;
mod nft;

use txmeta::TransactionMetadata;

pub(crate) use esdt::EsdtTransferRecognizer;
pub(crate) use multi::MultiTransferRecognizer;
pub(crate) use nft::NftTransferRecognizer;

pub(crate) trait TransferRecognizer {
    fn recognize(&self, metadata: &TransactionMetadata) -> Option<TransactionMetadata>;
}

/// All recognizers, in priority order. First match wins; the order is
/// fixed and load-bearing.
pub(crate) fn all_recognizers() -> Vec<Box<dyn TransferRecognizer>> {
    vec![
        Box::new(EsdtTransferRecognizer),
        Box::new(NftTransferRecognizer),
        Box::new(MultiTransferRecognizer),
    ]
}
