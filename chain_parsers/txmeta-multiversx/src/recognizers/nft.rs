use txmeta::{TransactionMetadata, TransactionMetadataTransfer};

use super::TransferRecognizer;
use crate::{address, codec};

const NFT_TRANSFER_FUNCTION_NAME: &str = "ESDTNFTTransfer";

/// Single NFT/SFT transfer. The protocol self-addresses these:
/// `ESDTNFTTransfer@<collection hex>@<nonce hex>@<quantity hex>@<receiver
/// pubkey hex>`, sender == receiver, with the true destination in the
/// fourth argument and an optional nested call after it.
pub(crate) struct NftTransferRecognizer;

impl TransferRecognizer for NftTransferRecognizer {
    fn recognize(&self, metadata: &TransactionMetadata) -> Option<TransactionMetadata> {
        if metadata.sender != metadata.receiver {
            return None;
        }
        if metadata.function_name.as_deref() != Some(NFT_TRANSFER_FUNCTION_NAME) {
            return None;
        }

        let args = metadata.function_args.as_deref()?;
        if args.len() < 4 {
            return None;
        }
        if !address::is_address_valid(&args[3]) {
            return None;
        }

        let collection = codec::hex_to_string(&args[0]).ok()?;
        let nonce = &args[1];
        let value = codec::hex_to_biguint(&args[2]);
        let receiver = address::bech32_encode(&args[3]).ok()?;

        let mut result = TransactionMetadata {
            sender: metadata.sender.clone(),
            receiver,
            value: value.clone(),
            ..TransactionMetadata::default()
        };

        if args.len() > 4 {
            result.function_name = Some(codec::hex_to_string(&args[4]).ok()?);
            result.function_args = Some(args[5..].to_vec());
        }

        result.transfers = Some(vec![TransactionMetadataTransfer::non_fungible(
            collection.clone(),
            format!("{collection}-{nonce}"),
            value,
        )]);

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use pretty_assertions::assert_eq;
    use txmeta::test_utils::assert_non_fungible_transfer_at;

    const ALICE: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";
    const CAROL: &str = "erd1k2s324ww2g0yj38qn2ch2jwctdy8mnfxep94q9arncc6xecg3xaq6mjse8";
    const CAROL_HEX: &str = "b2a11555ce521e4944e09ab17549d85b487dcd26c84b5017a39e31a3670889ba";

    fn self_addressed(args: &[&str]) -> TransactionMetadata {
        TransactionMetadata {
            sender: ALICE.to_string(),
            receiver: ALICE.to_string(),
            function_name: Some("ESDTNFTTransfer".to_string()),
            function_args: Some(args.iter().map(|s| s.to_string()).collect()),
            ..TransactionMetadata::default()
        }
    }

    #[test]
    fn test_recognizes_nft_transfer() {
        // MYNFT-abcdef nonce 05, quantity 1, to carol
        let metadata = self_addressed(&["4d594e46542d616263646566", "05", "01", CAROL_HEX]);

        let result = NftTransferRecognizer
            .recognize(&metadata)
            .expect("should recognize");

        assert_eq!(result.sender, ALICE);
        assert_eq!(result.receiver, CAROL);
        assert_eq!(result.value, BigUint::from(1u32));
        assert_eq!(result.function_name, None);
        assert_non_fungible_transfer_at(&result, 0, "MYNFT-abcdef", "MYNFT-abcdef-05", 1);
    }

    #[test]
    fn test_extra_arguments_become_nested_call() {
        let metadata = self_addressed(&[
            "4d594e46542d616263646566",
            "05",
            "01",
            CAROL_HEX,
            "626964", // "bid"
            "0102",
        ]);

        let result = NftTransferRecognizer
            .recognize(&metadata)
            .expect("should recognize");

        assert_eq!(result.function_name.as_deref(), Some("bid"));
        assert_eq!(result.function_args, Some(vec!["0102".to_string()]));
        assert_non_fungible_transfer_at(&result, 0, "MYNFT-abcdef", "MYNFT-abcdef-05", 1);
    }

    #[test]
    fn test_declines_when_not_self_addressed() {
        let mut metadata = self_addressed(&["4d594e46542d616263646566", "05", "01", CAROL_HEX]);
        metadata.receiver = CAROL.to_string();

        assert_eq!(NftTransferRecognizer.recognize(&metadata), None);
    }

    #[test]
    fn test_declines_invalid_destination_address() {
        // 31-byte destination
        let metadata = self_addressed(&[
            "4d594e46542d616263646566",
            "05",
            "01",
            &CAROL_HEX[..62],
        ]);

        assert_eq!(NftTransferRecognizer.recognize(&metadata), None);
    }

    #[test]
    fn test_declines_too_few_arguments() {
        let metadata = self_addressed(&["4d594e46542d616263646566", "05", "01"]);
        assert_eq!(NftTransferRecognizer.recognize(&metadata), None);
    }
}
