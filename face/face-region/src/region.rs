//! Facial region definition.

use face_types::FaceMesh;
use hashbrown::HashSet;

/// Default engineering-scale displacement cap, in mesh-local units.
///
/// Generous relative to the attenuated displacements the deformation engine
/// produces; individual regions in the built-in table may tighten it.
pub(crate) const DEFAULT_DISPLACEMENT_CAP: f64 = 0.5;

/// A named region of a face mesh, defined by landmark vertex indices.
///
/// Regions are the unit of selective deformation: each edit operation
/// resolves to one or two regions and displaces only their vertices. The
/// index set is opaque and not guaranteed contiguous.
///
/// # Example
///
/// ```
/// use face_region::FaceRegion;
///
/// let region = FaceRegion::from_vertices("nose_tip", 1..10);
/// assert_eq!(region.name(), "nose_tip");
/// assert_eq!(region.vertex_count(), 9);
/// assert!(region.contains_vertex(5));
/// ```
#[derive(Debug, Clone)]
pub struct FaceRegion {
    /// Unique name for this region.
    name: String,

    /// Landmark vertex indices that belong to this region.
    vertices: HashSet<u32>,

    /// Engineering-scale cap on per-vertex displacement magnitude,
    /// in mesh-local units.
    displacement_cap: f64,
}

impl FaceRegion {
    /// Creates an empty region with a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: HashSet::new(),
            displacement_cap: DEFAULT_DISPLACEMENT_CAP,
        }
    }

    /// Creates a region from vertex indices.
    ///
    /// # Example
    ///
    /// ```
    /// use face_region::FaceRegion;
    ///
    /// let region = FaceRegion::from_vertices("chin", [175, 176, 180]);
    /// assert_eq!(region.vertex_count(), 3);
    /// ```
    #[must_use]
    pub fn from_vertices(name: impl Into<String>, vertices: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name: name.into(),
            vertices: vertices.into_iter().collect(),
            displacement_cap: DEFAULT_DISPLACEMENT_CAP,
        }
    }

    /// Sets the engineering displacement cap.
    #[must_use]
    pub fn with_displacement_cap(mut self, cap: f64) -> Self {
        self.displacement_cap = cap;
        self
    }

    /// Returns the region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the engineering displacement cap in mesh-local units.
    #[must_use]
    pub const fn displacement_cap(&self) -> f64 {
        self.displacement_cap
    }

    /// Returns true if the region contains the given vertex index.
    #[must_use]
    pub fn contains_vertex(&self, vertex_index: u32) -> bool {
        self.vertices.contains(&vertex_index)
    }

    /// Returns the number of vertex indices in the region.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the region has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns an iterator over the region's vertex indices.
    pub fn vertices(&self) -> impl Iterator<Item = u32> + '_ {
        self.vertices.iter().copied()
    }

    /// Returns the region's indices that actually exist in `mesh`.
    ///
    /// The region table assumes the detector's full landmark topology; a
    /// mesh with fewer vertices silently loses the out-of-range indices.
    ///
    /// # Example
    ///
    /// ```
    /// use face_region::FaceRegion;
    /// use face_types::{FaceMesh, Point3};
    ///
    /// let region = FaceRegion::from_vertices("r", [0, 2, 99]);
    ///
    /// let mut mesh = FaceMesh::new();
    /// mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
    /// mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
    /// mesh.vertices.push(Point3::new(2.0, 0.0, 0.0));
    ///
    /// let valid = region.valid_vertices(&mesh);
    /// assert_eq!(valid.len(), 2);
    /// assert!(!valid.contains(&99));
    /// ```
    #[must_use]
    pub fn valid_vertices(&self, mesh: &FaceMesh) -> HashSet<u32> {
        let count = mesh.vertex_count();
        self.vertices
            .iter()
            .copied()
            .filter(|&i| (i as usize) < count)
            .collect()
    }
}
