//! Chart-wide series registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::series::{PointDescriptor, PointOptions, PointStore};
use crate::error::{ChartError, ChartResult};

/// Caller-facing payload for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub id: String,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub data: Vec<PointDescriptor>,
    #[serde(default)]
    pub options: Option<PointOptions>,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, data: Vec<PointDescriptor>) -> Self {
        Self {
            id: id.into(),
            colour: None,
            data,
            options: None,
        }
    }
}

/// Insertion-ordered id-to-store map for the whole chart.
#[derive(Debug, Clone, Default)]
pub struct SeriesRegistry {
    series: IndexMap<String, PointStore>,
}

impl SeriesRegistry {
    /// Builds and inserts a new series from its descriptor.
    ///
    /// `fallback_colour` is used when the descriptor carries no colour of its
    /// own (the engine cycles it from the chart palette). An existing series
    /// id is a `DuplicateId` error and leaves the registry untouched.
    pub fn add_series(
        &mut self,
        descriptor: SeriesDescriptor,
        fallback_colour: &str,
    ) -> ChartResult<&mut PointStore> {
        if self.series.contains_key(&descriptor.id) {
            return Err(ChartError::DuplicateId {
                kind: "series",
                id: descriptor.id,
            });
        }

        let SeriesDescriptor {
            id,
            colour,
            data,
            options,
        } = descriptor;

        let mut store = PointStore::new(
            id.clone(),
            colour.unwrap_or_else(|| fallback_colour.to_owned()),
            options.unwrap_or_default(),
        );
        store.build_points(data);

        Ok(self.series.entry(id).or_insert(store))
    }

    #[must_use]
    pub fn series(&self, id: &str) -> Option<&PointStore> {
        self.series.get(id)
    }

    pub(crate) fn series_mut(&mut self, id: &str) -> Option<&mut PointStore> {
        self.series.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PointStore)> {
        self.series.iter().map(|(id, store)| (id.as_str(), store))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.series.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
