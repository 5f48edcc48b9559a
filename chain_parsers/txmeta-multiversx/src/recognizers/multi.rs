use txmeta::{TransactionMetadata, TransactionMetadataTransfer};

use super::TransferRecognizer;
use crate::{address, codec};

const MULTI_TRANSFER_FUNCTION_NAME: &str = "MultiESDTNFTTransfer";

/// Batched transfer, self-addressed like single NFT transfers:
/// `MultiESDTNFTTransfer@<receiver pubkey hex>@<count hex>` followed by
/// `count` groups of `<identifier hex>@<nonce hex>@<quantity hex>`. A
/// zero nonce marks a fungible amount, a positive one an NFT/SFT. Any
/// leftover arguments form a nested call.
pub(crate) struct MultiTransferRecognizer;

impl TransferRecognizer for MultiTransferRecognizer {
    fn recognize(&self, metadata: &TransactionMetadata) -> Option<TransactionMetadata> {
        if metadata.sender != metadata.receiver {
            return None;
        }
        if metadata.function_name.as_deref() != Some(MULTI_TRANSFER_FUNCTION_NAME) {
            return None;
        }

        let args = metadata.function_args.as_deref()?;
        if args.len() < 3 {
            return None;
        }
        if !address::is_address_valid(&args[0]) {
            return None;
        }

        let receiver = address::bech32_encode(&args[0]).ok()?;
        let count = usize::try_from(codec::hex_to_number(&args[1])?).ok()?;
        if count == 0 {
            return None;
        }

        // A truncated batch would leave the transfer list shorter than the
        // declared count; decline instead.
        let groups_end = count.checked_mul(3)?.checked_add(2)?;
        if args.len() < groups_end {
            return None;
        }

        let mut transfers = Vec::with_capacity(count);
        for group in args[2..groups_end].chunks_exact(3) {
            let identifier = codec::hex_to_string(&group[0]).ok()?;
            let nonce = &group[1];
            let value = codec::hex_to_biguint(&group[2]);

            let transfer = match codec::hex_to_number(nonce) {
                Some(n) if n > 0 => TransactionMetadataTransfer::non_fungible(
                    identifier.clone(),
                    format!("{identifier}-{nonce}"),
                    value,
                ),
                _ => TransactionMetadataTransfer::fungible(identifier, value),
            };
            transfers.push(transfer);
        }

        let mut result = TransactionMetadata {
            sender: metadata.sender.clone(),
            receiver,
            ..TransactionMetadata::default()
        };

        if args.len() > groups_end {
            result.function_name = Some(codec::hex_to_string(&args[groups_end]).ok()?);
            result.function_args = Some(args[groups_end + 1..].to_vec());
        }

        result.transfers = Some(transfers);

        Some(result)
    }
}
