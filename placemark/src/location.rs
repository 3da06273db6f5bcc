//! Location records as returned by the catalog's data store.
//!
//! [`LocationRecord`] mirrors a stored row with its joined category and
//! photos. [`ProcessedLocation`] is the flattened form the UI works with.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;

use crate::extract::{CoordinateExtractor, Extraction};
use crate::resource::ResourceKind;

/// Errors reading location data.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The file could not be opened or read.
    #[error("Failed to read locations: {0}")]
    Io(#[from] io::Error),

    /// The data is not a JSON array of location rows.
    #[error("Invalid location data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Joined category row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// Joined photo row; `is_main` may be unset in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub photo_url: String,
    #[serde(default)]
    pub is_main: Option<bool>,
}

/// A location row with its category and photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    /// Free-text place description, e.g. a town or address
    pub location: String,
    pub category_id: String,
    #[serde(default)]
    pub map_url: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub visited: bool,
    #[serde(default)]
    pub categories: Option<CategoryRef>,
    #[serde(default)]
    pub photos: Option<Vec<PhotoRecord>>,
}

/// A photo with its main flag resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub photo_url: String,
    pub is_main: bool,
}

/// A location flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedLocation {
    pub id: String,
    pub name: String,
    pub location: String,
    pub category_id: String,
    pub map_url: Option<String>,
    pub web_url: Option<String>,
    pub instagram_url: Option<String>,
    pub facebook_url: Option<String>,
    pub youtube_url: Option<String>,
    pub visited: bool,
    /// Category name, empty when the category join is missing
    pub category_name: String,
    /// URL of the first photo flagged as main
    pub main_photo_url: Option<String>,
    pub photos: Vec<Photo>,
}

impl From<LocationRecord> for ProcessedLocation {
    fn from(record: LocationRecord) -> Self {
        let photos: Vec<Photo> = record
            .photos
            .unwrap_or_default()
            .into_iter()
            .map(|p| Photo {
                photo_url: p.photo_url,
                is_main: p.is_main.unwrap_or(false),
            })
            .collect();

        let main_photo_url = photos
            .iter()
            .find(|p| p.is_main)
            .map(|p| p.photo_url.clone());

        Self {
            id: record.id,
            name: record.name,
            location: record.location,
            category_id: record.category_id,
            map_url: record.map_url,
            web_url: record.web_url,
            instagram_url: record.instagram_url,
            facebook_url: record.facebook_url,
            youtube_url: record.youtube_url,
            visited: record.visited,
            category_name: record.categories.map(|c| c.name).unwrap_or_default(),
            main_photo_url,
            photos,
        }
    }
}

impl ProcessedLocation {
    /// Coordinates encoded in the saved map link, if any.
    pub fn coordinates(&self, extractor: &CoordinateExtractor) -> Extraction {
        extractor.extract_optional(self.map_url.as_deref())
    }

    /// External links present on this location, in display order.
    ///
    /// Blank URLs are treated as absent.
    pub fn resources(&self) -> Vec<(ResourceKind, &str)> {
        [
            (ResourceKind::Web, &self.web_url),
            (ResourceKind::Facebook, &self.facebook_url),
            (ResourceKind::Instagram, &self.instagram_url),
            (ResourceKind::Youtube, &self.youtube_url),
            (ResourceKind::Map, &self.map_url),
        ]
        .into_iter()
        .filter_map(|(kind, url)| {
            url.as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| (kind, u))
        })
        .collect()
    }
}

/// Reads a JSON array of location rows.
pub fn load_locations<R: Read>(reader: R) -> Result<Vec<LocationRecord>, LocationError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a JSON array of location rows from a file.
pub fn load_locations_from_path(path: &Path) -> Result<Vec<LocationRecord>, LocationError> {
    let file = File::open(path)?;
    load_locations(BufReader::new(file))
}
