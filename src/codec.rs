//! Filter state <-> address (URL query string) mapping.
//!
//! The address uses `application/x-www-form-urlencoded` pairs with the keys
//! `q`, `tags`, `atoms` and `mode`. List values are comma-joined; a comma
//! inside a tag or atom is not escaped and splits the value on decode.

use crate::filter::{FilterState, Mode};
use std::collections::BTreeSet;
use url::{form_urlencoded, Url};

const QUERY_KEY: &str = "q";
const TAGS_KEY: &str = "tags";
const ATOMS_KEY: &str = "atoms";
const MODE_KEY: &str = "mode";

/// Serialize `state` into an address query string (without leading `?`).
///
/// Empty values are omitted, except `mode` which is always written. Lists
/// come out sorted, so equal selections always produce the same address.
pub fn encode(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.query.is_empty() {
        serializer.append_pair(QUERY_KEY, &state.query);
    }
    if !state.tags.is_empty() {
        serializer.append_pair(TAGS_KEY, &join_list(&state.tags));
    }
    if !state.atoms.is_empty() {
        serializer.append_pair(ATOMS_KEY, &join_list(&state.atoms));
    }
    serializer.append_pair(MODE_KEY, state.mode.as_str());

    serializer.finish()
}

/// Parse an address query string. A leading `?` is ignored.
///
/// Never fails: unknown keys are ignored and anything missing or malformed
/// falls back to its default. For repeated keys the first value wins.
pub fn decode(address: &str) -> FilterState {
    let pairs = address.strip_prefix('?').unwrap_or(address);

    let mut query = None;
    let mut tags = None;
    let mut atoms = None;
    let mut mode = None;

    for (key, value) in form_urlencoded::parse(pairs.as_bytes()) {
        let slot = match &*key {
            QUERY_KEY => &mut query,
            TAGS_KEY => &mut tags,
            ATOMS_KEY => &mut atoms,
            MODE_KEY => &mut mode,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    FilterState {
        query: query.unwrap_or_default(),
        tags: split_list(tags.as_deref()),
        atoms: split_list(atoms.as_deref()),
        mode: Mode::parse(mode.as_deref().unwrap_or_default()),
    }
}

/// Decode the query component of a full URL
pub fn decode_url(url: &Url) -> FilterState {
    decode(url.query().unwrap_or_default())
}

fn join_list(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

fn split_list(raw: Option<&str>) -> BTreeSet<String> {
    raw.unwrap_or_default()
        .split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
