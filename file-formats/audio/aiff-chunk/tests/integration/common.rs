//! Common chunk decoding tests

use crate::fixtures::{self, RATE_44100};
use aiff_chunk::{
    AiffError, ChunkHeader, ChunkId, CommonChunk, CommonChunkDecoder, FormType,
    decode_chunk_header,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn decode(chunk: &[u8], is_aifc: bool) -> aiff_chunk::Result<CommonChunk> {
    let header = decode_chunk_header(chunk, 0)?;
    CommonChunkDecoder::new(header, is_aifc)?.decode(chunk, ChunkHeader::SIZE)
}

#[test]
fn stereo_cd_quality_aiff() {
    fixtures::init_logging();

    let body = fixtures::common_prefix(2, 1000, 16, RATE_44100);
    let chunk = fixtures::chunk(ChunkId::COMM, &body);

    assert_eq!(
        decode(&chunk, false).unwrap(),
        CommonChunk {
            num_channels: 2,
            num_sample_frames: 1000,
            sample_size: 16,
            sample_rate: 44100,
            compression_type: None,
            compression_name: Some("PCM".to_string()),
        }
    );
}

#[test]
fn aiff_body_with_reserved_bytes() {
    // 26 declared body bytes, the last 8 belong to no field
    let mut body = fixtures::common_prefix(2, 1000, 16, RATE_44100);
    body.extend_from_slice(&[0u8; 8]);
    let chunk = fixtures::chunk(ChunkId::COMM, &body);

    let header = decode_chunk_header(&chunk, 0).unwrap();
    let decoder = CommonChunkDecoder::new(header, false).unwrap();
    let common = decoder.decode(&chunk, ChunkHeader::SIZE).unwrap();

    assert_eq!(common.sample_rate, 44100);
    assert_eq!(common.compression_name.as_deref(), Some("PCM"));
    assert_eq!(decoder.declared_size(), 26);
}

#[test]
fn aiff_reports_pcm_for_any_rate_pattern() {
    for exponent in [0u16, 1, 16_383, 16_398, 0x7FFF, 0xFFFF] {
        for mantissa in [0u16, 1, 0x8000, 0xFFFF] {
            let body = fixtures::common_prefix(1, 1, 8, (exponent, mantissa));
            let chunk = fixtures::chunk(ChunkId::COMM, &body);
            let common = decode(&chunk, false).unwrap();

            assert_eq!(common.compression_type, None);
            assert_eq!(common.compression_name.as_deref(), Some("PCM"));
        }
    }
}

#[test_case(16_398, 44100, 44100 ; "exponent at bias")]
#[test_case(16_399, 22050, 44100 ; "one step above bias")]
#[test_case(16_397, 44100, 22050 ; "one step below bias")]
#[test_case(16_395, 64000, 8000 ; "three steps below bias")]
#[test_case(16_401, 48000, 384_000 ; "three steps above bias")]
fn sample_rate_shift(exponent: u16, mantissa: u16, expected: u32) {
    let body = fixtures::common_prefix(1, 0, 16, (exponent, mantissa));
    let chunk = fixtures::chunk(ChunkId::COMM, &body);

    assert_eq!(decode(&chunk, false).unwrap().sample_rate, expected);
}

#[test]
fn aifc_minimal_chunk_has_no_name() {
    let body = fixtures::with_compression(
        fixtures::common_prefix(2, 44100, 16, RATE_44100),
        ChunkId::SOWT,
        None,
    );
    let chunk = fixtures::chunk(ChunkId::COMM, &body);
    let common = decode(&chunk, true).unwrap();

    assert_eq!(common.compression_type, Some(ChunkId::SOWT));
    assert_eq!(common.compression_name, None);
}

#[test_case(ChunkId::NONE, "not compressed" ; "none")]
#[test_case(ChunkId::SOWT, "" ; "empty name")]
#[test_case(ChunkId::FL32, "32-bit floating point" ; "float")]
#[test_case(ChunkId::ULAW, "\u{b5}Law 2:1" ; "latin1 name")]
#[test_case(ChunkId::IMA4, "IMA 4:1" ; "ima")]
fn aifc_named_compression(compression: ChunkId, name: &str) {
    fixtures::init_logging();

    let body = fixtures::with_compression(
        fixtures::common_prefix(1, 8000, 16, (16_395, 64000)),
        compression,
        Some(name),
    );
    assert_eq!(body.len() % 2, 0);

    let chunk = fixtures::chunk(ChunkId::COMM, &body);
    let common = decode(&chunk, true).unwrap();

    assert_eq!(common.sample_rate, 8000);
    assert_eq!(common.compression_type, Some(compression));
    let decoded = common.compression_name.expect("compression name present");
    assert_eq!(decoded.chars().count(), name.chars().count());
    assert_eq!(decoded, name);
}

#[test]
fn aifc_declared_size_disagrees_with_pstring() {
    let mut body = fixtures::with_compression(
        fixtures::common_prefix(1, 8000, 16, RATE_44100),
        ChunkId::FL32,
        Some("fl32"),
    );
    body.extend_from_slice(&[0, 0]);
    let chunk = fixtures::chunk(ChunkId::COMM, &body);

    let err = decode(&chunk, true).unwrap_err();
    assert!(
        matches!(err, AiffError::InvalidFormat(ref msg) if msg.contains("Illegal pstring length")),
        "unexpected error: {err}"
    );
}

#[test]
fn aifc_pstring_missing_pad_byte() {
    // 4-character name without its pad byte: declared 27, pstring needs 28
    let mut body = fixtures::common_prefix(1, 8000, 16, RATE_44100);
    body.extend_from_slice(b"sowt");
    body.push(4);
    body.extend_from_slice(b"sowt");
    let chunk = fixtures::chunk(ChunkId::COMM, &body);

    assert!(matches!(
        decode(&chunk, true),
        Err(AiffError::InvalidFormat(_))
    ));
}

#[test_case(17, false ; "aiff below 18")]
#[test_case(0, false ; "aiff empty")]
#[test_case(21, true ; "aifc below 22")]
#[test_case(18, true ; "aifc with aiff size")]
fn undersized_chunk_rejected_before_reading(size: u32, is_aifc: bool) {
    let header = ChunkHeader {
        id: ChunkId::COMM,
        size,
    };

    assert!(matches!(
        CommonChunkDecoder::new(header, is_aifc),
        Err(AiffError::InvalidFormat(_))
    ));
}

#[test]
fn decode_at_body_offset_inside_larger_buffer() {
    let body = fixtures::common_prefix(6, 123_456, 24, (16_399, 48000));
    let mut buf = vec![0xEE; 11];
    buf.extend_from_slice(&fixtures::chunk(ChunkId::COMM, &body));

    let header = decode_chunk_header(&buf, 11).unwrap();
    let common = CommonChunkDecoder::for_form(header, FormType::Aiff)
        .unwrap()
        .decode(&buf, 11 + ChunkHeader::SIZE)
        .unwrap();

    assert_eq!(common.num_channels, 6);
    assert_eq!(common.num_sample_frames, 123_456);
    assert_eq!(common.sample_size, 24);
    assert_eq!(common.sample_rate, 96000);
}

#[cfg(feature = "serde")]
#[test]
fn common_chunk_serializes() {
    let body = fixtures::common_prefix(2, 1000, 16, RATE_44100);
    let chunk = fixtures::chunk(ChunkId::COMM, &body);
    let common = decode(&chunk, false).unwrap();

    let json = serde_json::to_string(&common).unwrap();
    let back: CommonChunk = serde_json::from_str(&json).unwrap();
    assert_eq!(back, common);
}
