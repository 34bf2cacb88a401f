use alloy::rpc::types::Log;
use alloy::sol;
use alloy::sol_types::SolEvent;

// Minimal ERC-20 surface: the Transfer event shape plus the three metadata
// accessors the resolver calls.
sol! {
    event Transfer(address indexed from, address indexed to, uint256 value);

    function name() external view returns (string);
    function symbol() external view returns (string);
    function decimals() external view returns (uint8);
}

/// Topic 0 identifies the event; only `Transfer(address,address,uint256)` passes.
pub fn is_transfer_log(log: &Log) -> bool {
    log.topics().first() == Some(&Transfer::SIGNATURE_HASH)
}

pub fn decode_transfer_event(log: &Log) -> anyhow::Result<Transfer> {
    let log_data = log.data();
    let decoded = Transfer::decode_raw_log(log.topics(), &log_data.data)?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, B256, Bytes, LogData, U256, keccak256};

    fn raw_log(topics: Vec<B256>, data: Vec<u8>) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address: Address::repeat_byte(0xaa),
                data: LogData::new_unchecked(topics, Bytes::from(data)),
            },
            ..Default::default()
        }
    }

    #[test]
    fn signature_hash_matches_the_literal_signature() {
        assert_eq!(
            Transfer::SIGNATURE_HASH,
            keccak256(b"Transfer(address,address,uint256)")
        );
    }

    #[test]
    fn transfer_log_is_recognized_by_topic_zero() {
        let log = raw_log(
            vec![
                Transfer::SIGNATURE_HASH,
                Address::repeat_byte(0x11).into_word(),
                Address::repeat_byte(0x22).into_word(),
            ],
            U256::from(1u64).to_be_bytes::<32>().to_vec(),
        );
        assert!(is_transfer_log(&log));
    }

    #[test]
    fn other_topics_never_match() {
        let log = raw_log(vec![B256::repeat_byte(0x99)], vec![]);
        assert!(!is_transfer_log(&log));
        assert!(!is_transfer_log(&raw_log(vec![], vec![])));
    }

    #[test]
    fn decodes_indexed_addresses_and_amount() {
        let from = Address::repeat_byte(0x11);
        let to = Address::repeat_byte(0x22);
        let amount = U256::from(2_000_000u64);

        let log = raw_log(
            vec![Transfer::SIGNATURE_HASH, from.into_word(), to.into_word()],
            amount.to_be_bytes::<32>().to_vec(),
        );

        let event = decode_transfer_event(&log).unwrap();
        assert_eq!(event.from, from);
        assert_eq!(event.to, to);
        assert_eq!(event.value, amount);
    }

    #[test]
    fn truncated_payload_fails_to_decode() {
        let log = raw_log(
            vec![
                Transfer::SIGNATURE_HASH,
                Address::repeat_byte(0x11).into_word(),
                Address::repeat_byte(0x22).into_word(),
            ],
            vec![0x01, 0x02],
        );
        assert!(decode_transfer_event(&log).is_err());
    }
}
