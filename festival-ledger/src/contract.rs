// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! ABI of the `FestivalGreetings` contract.

use alloy_primitives::{Address, Log, B256, U256};
use alloy_sol_types::{sol, SolEvent};
use festival_base::{
    data_types::{DesignRef, GreetingRecord},
    identifiers::TokenId,
};

sol! {
    function mintGreetingCard(
        address recipient,
        string calldata message,
        string calldata festivalType,
        string calldata imageURI,
        bool isIpfsLink
    ) external payable returns (uint256);

    function getSentGreetings(address user) external view returns (uint256[]);

    function getReceivedGreetings(address user) external view returns (uint256[]);

    function getGreetingFestival(uint256 tokenId) external view returns (string);

    function getGreetingMessage(uint256 tokenId) external view returns (string);

    function getGreetingImage(uint256 tokenId) external view returns (string);

    function getGreetingSender(uint256 tokenId) external view returns (address);

    function ownerOf(uint256 tokenId) external view returns (address);

    function tokenURI(uint256 tokenId) external view returns (string);

    event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
}

/// Builds a greeting record from the fields stored by the contract.
///
/// The image slot holds what `mintGreetingCard` received as `imageURI`: either the id
/// of a built-in design or the artwork itself. Built-in designs carry no stored image.
pub fn greeting_record(
    token_id: TokenId,
    festival: String,
    message: String,
    image: String,
    sender: Address,
) -> GreetingRecord {
    let design_ref = DesignRef::from_wire(&image);
    let image_ref = match design_ref {
        DesignRef::Catalog(_) => String::new(),
        DesignRef::Image(_) => image,
    };
    GreetingRecord {
        token_id,
        festival,
        message,
        image_ref,
        sender,
        design_ref,
    }
}

/// Finds the id of the token minted by `contract` among the logs of a receipt, i.e. the
/// ERC-721 `Transfer` from the zero address.
pub fn minted_token_id<'a>(
    logs: impl IntoIterator<Item = &'a Log>,
    contract: Address,
) -> Option<TokenId> {
    logs.into_iter()
        .filter(|log| log.address == contract)
        .find_map(|log| {
            let topics = log.data.topics();
            if topics.len() != 4
                || topics[0] != Transfer::SIGNATURE_HASH
                || topics[1] != B256::ZERO
            {
                return None;
            }
            Some(TokenId(U256::from_be_bytes(topics[3].0)))
        })
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, Bytes};
    use alloy_sol_types::{SolCall, SolValue};

    use super::*;

    const CONTRACT: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

    fn transfer_log(emitter: Address, from: Address, token: u64) -> Log {
        Log::new_unchecked(
            emitter,
            vec![
                Transfer::SIGNATURE_HASH,
                from.into_word(),
                address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8").into_word(),
                B256::left_padding_from(&token.to_be_bytes()),
            ],
            Bytes::new(),
        )
    }

    #[test]
    fn test_minted_token_id() {
        let logs = [
            transfer_log(Address::repeat_byte(1), Address::ZERO, 1),
            transfer_log(CONTRACT, Address::repeat_byte(2), 2),
            transfer_log(CONTRACT, Address::ZERO, 3),
        ];
        assert_eq!(minted_token_id(&logs, CONTRACT), Some(TokenId::from(3)));
        assert_eq!(minted_token_id(&logs[..2], CONTRACT), None);
    }

    #[test]
    fn test_greeting_record_from_stored_image() {
        let sender = Address::repeat_byte(1);
        let design = mintGreetingCardCall {
            recipient: sender,
            message: "Hi".into(),
            festivalType: "Diwali".into(),
            imageURI: DesignRef::Catalog(3).to_wire(),
            isIpfsLink: false,
        };
        let record = greeting_record(
            TokenId::from(1),
            design.festivalType,
            design.message,
            design.imageURI,
            sender,
        );
        assert_eq!(record.design_ref, DesignRef::Catalog(3));
        assert!(record.image_ref.is_empty());

        let record = greeting_record(
            TokenId::from(2),
            "Eid".into(),
            "Hi".into(),
            "ipfs://bafyeid".into(),
            sender,
        );
        assert_eq!(record.design_ref, DesignRef::Image("ipfs://bafyeid".into()));
        assert_eq!(record.image_ref, "ipfs://bafyeid");
    }

    #[test]
    fn test_decode_id_list() {
        let encoded = (vec![U256::from(1), U256::from(2), U256::from(2)],).abi_encode_params();
        let ids = getSentGreetingsCall::abi_decode_returns(&encoded).unwrap();
        assert_eq!(ids, vec![U256::from(1), U256::from(2), U256::from(2)]);
    }
}
