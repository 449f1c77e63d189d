//! Collection of named facial regions.

use face_types::FaceMesh;
use hashbrown::{HashMap, HashSet};

use crate::builtin;
use crate::region::FaceRegion;

/// A lookup collection of named facial regions.
///
/// The map has no failure mode: looking up an unknown region name yields an
/// empty vertex set, never an error.
///
/// # Example
///
/// ```
/// use face_region::{FaceRegion, RegionMap};
///
/// let mut regions = RegionMap::new();
/// regions.add(FaceRegion::from_vertices("forehead", 10..22));
///
/// assert!(regions.contains("forehead"));
/// assert_eq!(regions.vertices_for("forehead").len(), 12);
/// assert!(regions.vertices_for("unknown").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    /// Regions indexed by name.
    regions: HashMap<String, FaceRegion>,
}

impl RegionMap {
    /// Creates a new empty region map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the built-in region table for the external detector's
    /// 468-landmark face topology.
    ///
    /// # Example
    ///
    /// ```
    /// use face_region::RegionMap;
    ///
    /// let regions = RegionMap::face_default();
    /// assert!(regions.contains("jaw_line"));
    /// assert!(regions.contains("left_eye"));
    /// assert!(regions.contains("right_eye"));
    /// ```
    #[must_use]
    pub fn face_default() -> Self {
        builtin::face_regions()
    }

    /// Adds a region to the map, replacing any existing region with the
    /// same name.
    pub fn add(&mut self, region: FaceRegion) {
        self.regions.insert(region.name().to_string(), region);
    }

    /// Gets a region by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FaceRegion> {
        self.regions.get(name)
    }

    /// Returns true if a region with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    /// Returns the number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns an iterator over region names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Returns an iterator over regions.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FaceRegion)> {
        self.regions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the vertex-index set for a named region.
    ///
    /// Unknown names yield an empty set.
    #[must_use]
    pub fn vertices_for(&self, name: &str) -> HashSet<u32> {
        self.regions
            .get(name)
            .map(|r| r.vertices().collect())
            .unwrap_or_default()
    }

    /// Returns the region's vertex indices that actually exist in `mesh`.
    ///
    /// Filters out indices at or beyond the mesh's vertex count; unknown
    /// names yield an empty set.
    #[must_use]
    pub fn valid_vertices_for(&self, name: &str, mesh: &FaceMesh) -> HashSet<u32> {
        self.regions
            .get(name)
            .map(|r| r.valid_vertices(mesh))
            .unwrap_or_default()
    }
}

impl FromIterator<FaceRegion> for RegionMap {
    fn from_iter<I: IntoIterator<Item = FaceRegion>>(iter: I) -> Self {
        let mut map = Self::new();
        for region in iter {
            map.add(region);
        }
        map
    }
}
