// crates/domain/src/codec/parse.rs
use tracing::debug;

use super::{options::ParseOptions, token::RangeToken};
use crate::model::OwnedVolumeSet;

/// Trimmed, non-empty fragments of `input`, split on any run of `;` / `,`.
pub fn fragments(input: &str) -> impl Iterator<Item = &str> {
    input
        .split([';', ','])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
}

/// Parses `input` with [`ParseOptions::default`].
pub fn parse(input: &str) -> OwnedVolumeSet {
    parse_with(input, &ParseOptions::default())
}

/// Parses free-form range text into the set of owned volumes.
///
/// Never fails: malformed fragments, inverted spans and spans larger than
/// [`ParseOptions::max_range_span`] contribute nothing. Volume `0` is never
/// admitted.
pub fn parse_with(input: &str, options: &ParseOptions) -> OwnedVolumeSet {
    let mut owned = OwnedVolumeSet::new();
    for fragment in fragments(input) {
        let token = match RangeToken::from_fragment(fragment) {
            Ok(token) => token,
            Err(reason) => {
                debug!(fragment, %reason, "ignoring malformed volume fragment");
                continue;
            }
        };
        if token.is_inverted() {
            debug!(fragment, "inverted volume range contributes nothing");
            continue;
        }
        let span_len = token.span_len();
        if !options.admits(span_len) {
            debug!(
                fragment,
                span_len,
                limit = options.max_range_span,
                "volume range exceeds expansion limit, ignoring"
            );
            continue;
        }
        owned.extend(token.volumes());
    }
    owned
}

/// The well-formed tokens of `input`, in input order.
///
/// Inverted and oversized spans are included as typed; only fragments that
/// fail to read at all are left out.
pub fn parse_tokens(input: &str) -> Vec<RangeToken> {
    fragments(input)
        .filter_map(|fragment| RangeToken::from_fragment(fragment).ok())
        .collect()
}
