//! GeoJSON document model and file export
//!
//! A thin, serialization-first view of the generated grid: polygon
//! features carrying synthesized cell attributes, wrapped in a feature
//! collection tagged with its coordinate reference system. Field order
//! in the structs matches the order written to disk.

use crate::generator::attributes::CellAttributes;
use crate::geometry::hexgrid::Ring;
use crate::io::configuration::WGS84_CRS_URN;
use crate::io::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Polygon geometry holding one or more rings of positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonGeometry {
    /// Geometry type tag, always `"Polygon"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Rings of `[longitude, latitude]` positions; the first is the
    /// exterior boundary
    pub coordinates: Vec<Ring>,
}

impl PolygonGeometry {
    /// Wrap a single exterior ring as a polygon
    pub fn from_ring(ring: Ring) -> Self {
        Self {
            kind: "Polygon".to_owned(),
            coordinates: vec![ring],
        }
    }
}

/// One grid cell: a polygon with its synthesized attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature type tag, always `"Feature"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Synthesized indicator values for this cell
    pub properties: CellAttributes,
    /// Hexagonal cell boundary
    pub geometry: PolygonGeometry,
}

impl Feature {
    /// Build a polygon feature from a cell ring and its attributes
    pub fn polygon(ring: Ring, properties: CellAttributes) -> Self {
        Self {
            kind: "Feature".to_owned(),
            properties,
            geometry: PolygonGeometry::from_ring(ring),
        }
    }
}

/// Named coordinate reference system member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crs {
    /// CRS member type tag, always `"name"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Holder of the CRS identifier
    pub properties: CrsProperties,
}

/// Identifier payload of a named CRS member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrsProperties {
    /// OGC URN of the coordinate reference system
    pub name: String,
}

impl Crs {
    /// The WGS84 geographic CRS every generated grid is expressed in
    pub fn wgs84() -> Self {
        Self {
            kind: "name".to_owned(),
            properties: CrsProperties {
                name: WGS84_CRS_URN.to_owned(),
            },
        }
    }
}

/// Ordered collection of generated cell features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Collection type tag, always `"FeatureCollection"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Coordinate reference system of every contained position
    pub crs: Crs,
    /// Cell features in grid enumeration order
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Wrap features, preserving their order, in a WGS84-tagged collection
    pub fn from_features(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".to_owned(),
            crs: Crs::wgs84(),
            features,
        }
    }

    /// Number of cell features in the collection
    pub const fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the collection holds no features
    pub const fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Write a feature collection to `path` as a GeoJSON document
///
/// Creates missing parent directories. With `pretty` set the document is
/// indented for reading; otherwise it is written compact.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The output file cannot be created or flushed
/// - The collection cannot be serialized
pub fn export_collection(
    collection: &FeatureCollection,
    path: &Path,
    pretty: bool,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let file = std::fs::File::create(path).map_err(|e| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = std::io::BufWriter::new(file);

    let serialized = if pretty {
        serde_json::to_writer_pretty(&mut writer, collection)
    } else {
        serde_json::to_writer(&mut writer, collection)
    };
    serialized.map_err(|e| GridError::Serialization {
        path: path.to_path_buf(),
        source: e,
    })?;

    writer.flush().map_err(|e| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "flush",
        source: e,
    })?;

    Ok(())
}
