use num_bigint::BigUint;

use crate::{TransactionMetadata, TransactionToDecode, TransferProperties};

pub fn plain_tx(sender: &str, receiver: &str, value: &str) -> TransactionToDecode {
    TransactionToDecode {
        sender: sender.to_string(),
        receiver: receiver.to_string(),
        data: String::new(),
        value: value.to_string(),
    }
}

pub fn call_tx(sender: &str, receiver: &str, data: &str, value: &str) -> TransactionToDecode {
    TransactionToDecode {
        sender: sender.to_string(),
        receiver: receiver.to_string(),
        data: data.to_string(),
        value: value.to_string(),
    }
}

pub fn assert_fungible_transfer_at(
    metadata: &TransactionMetadata,
    index: usize,
    token: &str,
    value: u64,
) {
    let transfers = metadata
        .transfers
        .as_ref()
        .unwrap_or_else(|| panic!("Should have transfers"));
    let transfer = transfers
        .get(index)
        .unwrap_or_else(|| panic!("Should have a transfer at index {index}"));

    assert!(
        transfer.value == BigUint::from(value),
        "Transfer {index} should move {value}, moved {}",
        transfer.value
    );
    match &transfer.properties {
        TransferProperties::Fungible { token: actual } => assert!(
            actual == token,
            "Transfer {index} should carry token {token}, carried {actual}"
        ),
        other => panic!("Transfer {index} should be fungible, was: {other:?}"),
    }
}

pub fn assert_non_fungible_transfer_at(
    metadata: &TransactionMetadata,
    index: usize,
    collection: &str,
    identifier: &str,
    value: u64,
) {
    let transfers = metadata
        .transfers
        .as_ref()
        .unwrap_or_else(|| panic!("Should have transfers"));
    let transfer = transfers
        .get(index)
        .unwrap_or_else(|| panic!("Should have a transfer at index {index}"));

    assert!(
        transfer.value == BigUint::from(value),
        "Transfer {index} should move {value}, moved {}",
        transfer.value
    );
    match &transfer.properties {
        TransferProperties::NonFungible {
            collection: actual_collection,
            identifier: actual_identifier,
        } => {
            assert!(
                actual_collection == collection,
                "Transfer {index} should be from collection {collection}, was {actual_collection}"
            );
            assert!(
                actual_identifier == identifier,
                "Transfer {index} should carry {identifier}, carried {actual_identifier}"
            );
        }
        other => panic!("Transfer {index} should be an NFT/SFT, was: {other:?}"),
    }
}
