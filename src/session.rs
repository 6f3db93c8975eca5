use crate::catalog::Catalog;
use crate::codec::{decode, encode};
use crate::error::FinderError;
use crate::facets::Facets;
use crate::filter::{FilterState, Mode};
use crate::model::Recipe;
use crate::query::execute;
use crate::render::{Renderer, View};
use log::{debug, error};
use std::collections::BTreeSet;
use std::sync::Arc;

/// An interactive browsing session over a loaded [`Catalog`].
///
/// The session is the only owner of the [`FilterState`]. Every mutation
/// re-encodes the address before returning; [`Session::results`] always
/// reflects the latest state, so callers can redraw straight from it and
/// persist [`Session::address`].
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    state: FilterState,
    address: String,
}

impl Session {
    /// Open a session with the state read from `address`
    pub fn new(catalog: Arc<Catalog>, address: &str) -> Self {
        Self::with_state(catalog, decode(address))
    }

    pub fn with_state(catalog: Arc<Catalog>, state: FilterState) -> Self {
        let mut session = Session {
            catalog,
            state,
            address: String::new(),
        };
        session.refresh();
        session
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn facets(&self) -> &Facets {
        self.catalog.facets()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// The current state encoded as an address query string
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Matching recipes sorted by name
    pub fn results(&self) -> Vec<&Recipe> {
        execute(self.catalog.recipes(), &self.state)
    }

    pub fn set_query(&mut self, query: &str) {
        self.state.query = query.trim().to_string();
        self.refresh();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.state.tags, tag);
        self.refresh();
    }

    /// Replace the whole tag selection at once
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.tags = tags.into_iter().map(Into::into).collect();
        self.refresh();
    }

    pub fn toggle_atom(&mut self, atom: &str) {
        toggle(&mut self.state.atoms, atom);
        self.refresh();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.state.mode = mode;
        self.refresh();
    }

    /// Reset query, selections and mode
    pub fn clear(&mut self) {
        self.state = FilterState::new();
        self.refresh();
    }

    /// Hand the current results to `renderer`.
    ///
    /// A renderer failure is logged and returned; the session stays usable.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), FinderError> {
        let results = self.results();
        let view = View {
            facets: self.facets(),
            results: &results,
            state: &self.state,
        };

        renderer.render(&view).map_err(|e| {
            error!("Failed to render {} results: {}", results.len(), e);
            e
        })
    }

    fn refresh(&mut self) {
        self.address = encode(&self.state);
        debug!("Filter state changed: ?{}", self.address);
    }
}

fn toggle(selection: &mut BTreeSet<String>, value: &str) {
    if !selection.remove(value) {
        selection.insert(value.to_string());
    }
}
