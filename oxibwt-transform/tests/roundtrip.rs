//! Round-trip and boundary tests across the whole transform stack.

use oxibwt_transform::suffix::compare_rotations;
use oxibwt_transform::{
    BurrowsWheeler, ByteOrder, ByteTransform, BwtBlock, CircularSuffixArray, FrameConfig,
    OxiBwtError, Pipeline, bwt, compress, decompress, frame, mtf,
};
use quickcheck::{TestResult, quickcheck};
use std::cmp::Ordering;

fn is_permutation(index: &[usize]) -> bool {
    let mut seen = vec![false; index.len()];
    for &i in index {
        if i >= seen.len() || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

quickcheck! {
    fn prop_bwt_roundtrip(data: Vec<u8>) -> TestResult {
        if data.is_empty() {
            return TestResult::discard();
        }
        let block = bwt::transform(&data).unwrap();
        TestResult::from_bool(bwt::inverse_transform(block.first(), block.data()).unwrap() == data)
    }

    fn prop_mtf_roundtrip(data: Vec<u8>) -> bool {
        let encoded = mtf::encode(&data);
        encoded.len() == data.len() && mtf::decode(&encoded) == data
    }

    fn prop_pipeline_roundtrip(data: Vec<u8>) -> TestResult {
        if data.is_empty() {
            return TestResult::discard();
        }
        TestResult::from_bool(decompress(&compress(&data).unwrap()).unwrap() == data)
    }

    fn prop_suffix_order_total(data: Vec<u8>) -> bool {
        let csa = CircularSuffixArray::new(&data);
        let index = csa.as_slice();
        is_permutation(index)
            && index.windows(2).all(|w| match compare_rotations(&data, w[0], w[1]) {
                Ordering::Less => true,
                Ordering::Equal => w[0] < w[1],
                Ordering::Greater => false,
            })
    }

    fn prop_suffix_order_deterministic(data: Vec<u8>) -> bool {
        CircularSuffixArray::new(&data) == CircularSuffixArray::new(&data)
    }

    fn prop_periodic_roundtrip(unit: Vec<u8>, repeats: u8) -> TestResult {
        if unit.is_empty() {
            return TestResult::discard();
        }
        let data = unit.repeat(repeats as usize % 16 + 1);
        let block = bwt::transform(&data).unwrap();
        TestResult::from_bool(block.invert().unwrap() == data)
    }
}

#[test]
fn test_known_vector() {
    let block = bwt::transform(b"ABRACADABRA!").unwrap();
    assert_eq!(block.first(), 3);
    assert_eq!(block.data(), b"ARD!RCAAAABB");
    assert_eq!(
        bwt::inverse_transform(3, b"ARD!RCAAAABB").unwrap(),
        b"ABRACADABRA!"
    );
}

#[test]
fn test_single_byte_is_identity() {
    for byte in [0u8, b'x', 0xff] {
        let block = bwt::transform(&[byte]).unwrap();
        assert_eq!(block.first(), 0);
        assert_eq!(block.data(), &[byte]);
    }
}

#[test]
fn test_manual_pipeline() {
    // decode(encode(transform(s))) inverse-transformed equals s
    let data = b"she sells sea shells by the sea shore".repeat(20);
    let block = bwt::transform(&data).unwrap();
    let symbols = mtf::encode(block.data());

    let zeros = symbols.iter().filter(|&&s| s == 0).count();
    assert!(zeros > data.len() / 2);

    let restored = bwt::inverse_transform(block.first(), &mtf::decode(&symbols)).unwrap();
    assert_eq!(restored, data);
}

#[test]
fn test_consecutive_bytes_encode_zero() {
    for byte in 0..=255u8 {
        let encoded = mtf::encode(&[byte, byte]);
        assert_eq!(encoded, vec![byte, 0]);
    }
}

#[test]
fn test_all_byte_values() {
    let data: Vec<u8> = (0..=255u8).rev().chain(0..=255u8).collect();
    assert_eq!(decompress(&compress(&data).unwrap()).unwrap(), data);
}

#[test]
fn test_frame_stream_io() {
    let config = FrameConfig::new(ByteOrder::LittleEndian);
    let block = bwt::transform(b"a man a plan a canal panama").unwrap();

    let mut wire = Vec::new();
    frame::write_block(&mut wire, &block, &config).unwrap();
    let parsed = frame::read_block(&mut wire.as_slice(), &config).unwrap();
    assert_eq!(parsed, block);
    assert_eq!(parsed.invert().unwrap(), b"a man a plan a canal panama");
}

#[test]
fn test_malformed_frames() {
    let stage = BurrowsWheeler::default();

    assert!(matches!(
        stage.inverse(b"\x00\x00").unwrap_err(),
        OxiBwtError::MalformedInput { .. }
    ));
    assert!(matches!(
        stage.inverse(b"\x00\x00\x00\x00").unwrap_err(),
        OxiBwtError::MalformedInput { .. }
    ));
    assert!(matches!(
        stage.inverse(b"\x00\x00\x00\x09abc").unwrap_err(),
        OxiBwtError::OutOfRange { index: 9, len: 3, .. }
    ));
}

#[test]
fn test_block_parts() {
    let block = BwtBlock::new(0, b"ba".to_vec()).unwrap();
    assert_eq!(block.invert().unwrap(), b"ab");
    assert_eq!(block, bwt::transform(b"ab").unwrap());

    let (first, data) = block.into_parts();
    assert_eq!((first, data.as_slice()), (0, b"ba".as_slice()));
}

#[test]
fn test_custom_pipeline_order() {
    // MTF first, then BWT: still reversible, just a different stream.
    let pipeline = Pipeline::new()
        .push(mtf::MoveToFront)
        .push(BurrowsWheeler::new(FrameConfig::STANDARD));
    let data = b"mississippi river";
    let encoded = pipeline.forward(data).unwrap();
    assert_eq!(encoded.len(), data.len() + 4);
    assert_eq!(pipeline.inverse(&encoded).unwrap(), data);
}
