use txmeta::{TransactionMetadata, TransactionMetadataTransfer};

use super::TransferRecognizer;
use crate::codec;

const ESDT_TRANSFER_FUNCTION_NAME: &str = "ESDTTransfer";

/// Fungible token transfer: `ESDTTransfer@<token hex>@<amount hex>`, with
/// an optional nested call in the remaining arguments.
pub(crate) struct EsdtTransferRecognizer;

impl TransferRecognizer for EsdtTransferRecognizer {
    fn recognize(&self, metadata: &TransactionMetadata) -> Option<TransactionMetadata> {
        if metadata.function_name.as_deref() != Some(ESDT_TRANSFER_FUNCTION_NAME) {
            return None;
        }

        let args = metadata.function_args.as_deref()?;
        if args.len() < 2 {
            return None;
        }

        let token = codec::hex_to_string(&args[0]).ok()?;
        let value = codec::hex_to_biguint(&args[1]);

        let mut result = TransactionMetadata {
            sender: metadata.sender.clone(),
            receiver: metadata.receiver.clone(),
            value: value.clone(),
            ..TransactionMetadata::default()
        };

        if args.len() > 2 {
            result.function_name = Some(codec::hex_to_string(&args[2]).ok()?);
            result.function_args = Some(args[3..].to_vec());
        }

        result.transfers = Some(vec![TransactionMetadataTransfer::fungible(token, value)]);

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use pretty_assertions::assert_eq;
    use txmeta::test_utils::assert_fungible_transfer_at;

    fn resolved(function_name: &str, args: &[&str]) -> TransactionMetadata {
        TransactionMetadata {
            sender: "erd1sender".to_string(),
            receiver: "erd1receiver".to_string(),
            function_name: Some(function_name.to_string()),
            function_args: Some(args.iter().map(|s| s.to_string()).collect()),
            ..TransactionMetadata::default()
        }
    }

    #[test]
    fn test_recognizes_fungible_transfer() {
        // WEGLD-bd4d79, amount 100
        let metadata = resolved(
            "ESDTTransfer",
            &["5745474c442d626434643739", "64"],
        );

        let result = EsdtTransferRecognizer
            .recognize(&metadata)
            .expect("should recognize");

        assert_eq!(result.sender, metadata.sender);
        assert_eq!(result.receiver, metadata.receiver);
        assert_eq!(result.value, BigUint::from(100u32));
        assert_eq!(result.function_name, None);
        assert_eq!(result.function_args, None);
        assert_fungible_transfer_at(&result, 0, "WEGLD-bd4d79", 100);
    }

    #[test]
    fn test_extra_arguments_become_nested_call() {
        // swapTokensFixedInput nested behind the transfer
        let metadata = resolved(
            "ESDTTransfer",
            &[
                "5745474c442d626434643739",
                "64",
                "73776170546f6b656e734669786564496e707574",
                "0102",
            ],
        );

        let result = EsdtTransferRecognizer
            .recognize(&metadata)
            .expect("should recognize");

        assert_eq!(
            result.function_name.as_deref(),
            Some("swapTokensFixedInput")
        );
        assert_eq!(result.function_args, Some(vec!["0102".to_string()]));
        assert_fungible_transfer_at(&result, 0, "WEGLD-bd4d79", 100);
    }

    #[test]
    fn test_declines_other_functions() {
        let metadata = resolved("transfer", &["5745474c442d626434643739", "64"]);
        assert_eq!(EsdtTransferRecognizer.recognize(&metadata), None);
    }

    #[test]
    fn test_declines_too_few_arguments() {
        let metadata = resolved("ESDTTransfer", &["5745474c442d626434643739"]);
        assert_eq!(EsdtTransferRecognizer.recognize(&metadata), None);
    }

    #[test]
    fn test_declines_without_arguments() {
        let metadata = TransactionMetadata {
            function_name: Some("ESDTTransfer".to_string()),
            ..TransactionMetadata::default()
        };
        assert_eq!(EsdtTransferRecognizer.recognize(&metadata), None);
    }
}
