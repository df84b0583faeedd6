//! Serialization wiring for graphs.
//!
//! A serialized graph is one record with three named fields — the
//! directedness flag, the offset array and the edge array — in any of four
//! encodings. Decoding re-validates the CSR invariants before handing the
//! graph back, so a corrupted or hand-edited payload cannot produce a
//! structurally broken graph.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use crate::models::csr::CsrGraph;
use crate::models::edge::EdgeRecord;
use crate::{GraphError, Result};

/// Available wire encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Native binary (`bincode`). Compact, not byte-order portable.
    Binary,
    /// Portable binary (`postcard`): varint-packed, platform independent.
    PortableBinary,
    /// JSON text.
    Json,
    /// XML text.
    Xml,
}

/// Encode any serializable value in the chosen encoding.
///
/// # Errors
///
/// [`GraphError::Codec`] if the underlying encoder fails.
pub fn encode<T: Serialize>(value: &T, encoding: Encoding) -> Result<Vec<u8>> {
    let bytes = match encoding {
        Encoding::Binary => bincode::serialize(value).map_err(codec_err)?,
        Encoding::PortableBinary => postcard::to_allocvec(value).map_err(codec_err)?,
        Encoding::Json => serde_json::to_vec(value).map_err(codec_err)?,
        Encoding::Xml => quick_xml::se::to_string(value)
            .map_err(codec_err)?
            .into_bytes(),
    };
    trace!(?encoding, len = bytes.len(), "encoded value");
    Ok(bytes)
}

/// Decode a value previously produced by [`encode`] with the same
/// encoding.
///
/// # Errors
///
/// [`GraphError::Codec`] if the payload does not parse.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], encoding: Encoding) -> Result<T> {
    trace!(?encoding, len = bytes.len(), "decoding value");
    match encoding {
        Encoding::Binary => bincode::deserialize(bytes).map_err(codec_err),
        Encoding::PortableBinary => postcard::from_bytes(bytes).map_err(codec_err),
        Encoding::Json => serde_json::from_slice(bytes).map_err(codec_err),
        Encoding::Xml => {
            let text = std::str::from_utf8(bytes).map_err(codec_err)?;
            quick_xml::de::from_str(text).map_err(codec_err)
        }
    }
}

/// Decode a graph and re-validate its CSR invariants.
///
/// This is the deserialization-overwrite path: the decoded instance fully
/// replaces any previous graph.
///
/// # Errors
///
/// - [`GraphError::Codec`] if the payload does not parse
/// - [`GraphError::InvalidCsr`] if the decoded arrays violate an invariant
pub fn decode_graph<E>(bytes: &[u8], encoding: Encoding) -> Result<CsrGraph<E>>
where
    E: EdgeRecord + DeserializeOwned,
{
    let graph: CsrGraph<E> = decode(bytes, encoding)?;
    graph.validate()?;
    Ok(graph)
}

fn codec_err<E: std::fmt::Display>(err: E) -> GraphError {
    GraphError::Codec(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::csr::CsrGraph;
    use crate::models::edge::{Edge, WeightedEdge};

    const ALL_ENCODINGS: [Encoding; 4] = [
        Encoding::Binary,
        Encoding::PortableBinary,
        Encoding::Json,
        Encoding::Xml,
    ];

    fn sample_graph() -> CsrGraph<Edge> {
        let edges = vec![
            Edge::new(0, 1),
            Edge::new(0, 2),
            Edge::new(1, 2),
            Edge::new(3, 0),
        ];
        CsrGraph::from_sorted_edges(edges, 4, true).unwrap()
    }

    #[test]
    fn round_trip_equality_in_every_encoding() {
        let g = sample_graph();
        for encoding in ALL_ENCODINGS {
            let bytes = encode(&g, encoding).unwrap();
            let back: CsrGraph<Edge> = decode_graph(&bytes, encoding).unwrap();
            assert_eq!(g, back, "round trip failed for {encoding:?}");
        }
    }

    #[test]
    fn round_trip_keeps_weights() {
        let edges = vec![
            WeightedEdge::new(0, 1, 10u32),
            WeightedEdge::new(1, 2, 20u32),
        ];
        let g = CsrGraph::from_sorted_edges(edges, 3, false).unwrap();
        for encoding in ALL_ENCODINGS {
            let bytes = encode(&g, encoding).unwrap();
            let back: CsrGraph<WeightedEdge<u32>> = decode_graph(&bytes, encoding).unwrap();
            assert_eq!(g, back, "round trip failed for {encoding:?}");
        }
    }

    #[test]
    fn json_uses_the_documented_field_names() {
        let g = sample_graph();
        let bytes = encode(&g, Encoding::Json).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"is_directed\":true"));
        assert!(text.contains("\"vertexes\":[0,2,3,3,4]"));
        assert!(text.contains("\"edges\":["));
    }

    #[test]
    fn tampered_payload_fails_validation() {
        let g = sample_graph();
        let mut value = serde_json::to_value(&g).unwrap();
        // Break monotonicity of the offsets.
        value["vertexes"][1] = serde_json::json!(99);
        let bytes = serde_json::to_vec(&value).unwrap();
        let err = decode_graph::<Edge>(&bytes, Encoding::Json).unwrap_err();
        assert!(matches!(err, GraphError::InvalidCsr(_)));
    }

    #[test]
    fn garbage_bytes_are_a_codec_error() {
        let err = decode_graph::<Edge>(b"not a graph", Encoding::Binary).unwrap_err();
        assert!(matches!(err, GraphError::Codec(_)));
    }
}
