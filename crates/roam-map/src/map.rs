//! The road map: named locations, optional positions, directed weighted links.

use indexmap::IndexMap;
use rand::{Rng, RngExt};
use roam_core::Point;

/// A named place on a map. Plain strings keep maps easy to build from data
/// files and debug output readable.
pub type Location = String;

/// One directed link. Endpoints are indexes into the location registry.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Link {
    from: u32,
    to: u32,
    weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Node {
    pos: Option<Point>,
    out: Vec<u32>, // ids of links leaving this location, registration order
    inc: Vec<u32>, // ids of links entering it, registration order
}

const NO_IDS: &[u32] = &[];

/// A weighted, geographically embedded road map.
///
/// Locations are registered on first mention by any mutator and are never
/// renumbered, so every listing keeps registration order. Links live in one
/// registration-ordered table, indexed per location in both directions: the
/// forward index answers "where can I go from here", the reverse index
/// answers "where could I have come from", which is what a backward or
/// bidirectional search walks.
///
/// Positions are optional. A map without them still supports movement and
/// costs; only straight-line estimates degrade (see
/// [`StraightLine`](crate::StraightLine)).
///
/// All query methods are total: asking about an unknown location yields
/// emptiness (`None`, an empty iterator), never an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoadMap {
    nodes: IndexMap<String, Node>,
    links: Vec<Link>,
}

impl RoadMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            links: Vec::new(),
        }
    }

    /// Index of `name` in the registry, registering it if unknown.
    fn intern(&mut self, name: &str) -> u32 {
        if let Some(i) = self.nodes.get_index_of(name) {
            return i as u32;
        }
        let (i, _) = self.nodes.insert_full(name.to_owned(), Node::default());
        i as u32
    }

    fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    fn name(&self, idx: u32) -> &str {
        // Link endpoints always refer to live registry entries: locations are
        // never removed individually, and clear() drops the links too.
        let (name, _) = self
            .nodes
            .get_index(idx as usize)
            .expect("link endpoint is interned");
        name
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of known locations.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the map has no locations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `loc` is a known location.
    #[inline]
    pub fn contains(&self, loc: &str) -> bool {
        self.nodes.contains_key(loc)
    }

    /// All known locations, in registration order.
    pub fn locations(&self) -> Locations<'_> {
        Locations {
            inner: self.nodes.keys(),
        }
    }

    /// Destinations one outgoing link away from `loc`, in link registration
    /// order. Unknown locations yield an empty iterator.
    pub fn next_locations(&self, loc: &str) -> Neighbors<'_> {
        Neighbors {
            map: self,
            ids: self.node(loc).map_or(NO_IDS, |n| n.out.as_slice()).iter(),
            origins: false,
        }
    }

    /// Origins one incoming link away from `loc`, in link registration
    /// order. Unknown locations yield an empty iterator.
    pub fn prev_locations(&self, loc: &str) -> Neighbors<'_> {
        Neighbors {
            map: self,
            ids: self.node(loc).map_or(NO_IDS, |n| n.inc.as_slice()).iter(),
            origins: true,
        }
    }

    /// Position of `loc`, if one has been assigned.
    pub fn position(&self, loc: &str) -> Option<Point> {
        self.node(loc).and_then(|n| n.pos)
    }

    /// Weight of the direct link `from -> to`, or `None` if there is none.
    /// With parallel links, the earliest registered one wins.
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let node = self.node(from)?;
        let ti = self.nodes.get_index_of(to)? as u32;
        node.out
            .iter()
            .map(|&id| &self.links[id as usize])
            .find(|l| l.to == ti)
            .map(|l| l.weight)
    }

    /// A uniformly random known location, or `None` on an empty map.
    /// Handy for generating goals in randomized scenarios.
    pub fn random_destination(&self, rng: &mut impl Rng) -> Option<&str> {
        if self.nodes.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.nodes.len());
        self.nodes.get_index(i).map(|(name, _)| name.as_str())
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Register a one-way link `from -> to` with the given weight. Endpoints
    /// become known locations if they were not already. Registering the same
    /// ordered pair again adds a parallel link rather than replacing.
    pub fn add_one_way(&mut self, from: &str, to: &str, weight: f64) {
        let fi = self.intern(from);
        let ti = self.intern(to);
        if let (Some(a), Some(b)) = (self.nodes[fi as usize].pos, self.nodes[ti as usize].pos) {
            let line = a.distance(b);
            if weight < line {
                log::debug!(
                    "link {from} -> {to}: weight {weight} is below the straight-line distance {line:.1}"
                );
            }
        }
        let id = self.links.len() as u32;
        self.links.push(Link { from: fi, to: ti, weight });
        self.nodes[fi as usize].out.push(id);
        self.nodes[ti as usize].inc.push(id);
    }

    /// Register links in both directions with the same weight.
    pub fn add_two_way(&mut self, a: &str, b: &str, weight: f64) {
        self.add_one_way(a, b, weight);
        self.add_one_way(b, a, weight);
    }

    /// Remove every link `from -> to`, parallel ones included. Both
    /// locations stay known. Unknown endpoints are a no-op.
    pub fn remove_one_way(&mut self, from: &str, to: &str) {
        let (Some(fi), Some(ti)) = (
            self.nodes.get_index_of(from),
            self.nodes.get_index_of(to),
        ) else {
            return;
        };
        let (fi, ti) = (fi as u32, ti as u32);
        let before = self.links.len();
        self.links.retain(|l| !(l.from == fi && l.to == ti));
        if self.links.len() != before {
            self.reindex();
        }
    }

    /// Remove every link between `a` and `b`, in both directions.
    pub fn remove_two_way(&mut self, a: &str, b: &str) {
        self.remove_one_way(a, b);
        self.remove_one_way(b, a);
    }

    /// Rebuild the per-location id lists. Link ids are positions in the link
    /// table, so a removal renumbers every link registered after the gap.
    fn reindex(&mut self) {
        for node in self.nodes.values_mut() {
            node.out.clear();
            node.inc.clear();
        }
        for (id, link) in self.links.iter().enumerate() {
            self.nodes[link.from as usize].out.push(id as u32);
            self.nodes[link.to as usize].inc.push(id as u32);
        }
    }

    /// Assign coordinates to `loc`, registering it if needed. Overwrites any
    /// earlier position.
    pub fn set_position(&mut self, loc: &str, x: f64, y: f64) {
        let i = self.intern(loc);
        self.nodes[i as usize].pos = Some(Point::new(x, y));
    }

    /// Assign coordinates from a straight-line distance and compass bearing
    /// relative to the map origin. Placing a reference location at the
    /// origin makes `dist` exactly the straight-line distance to it.
    pub fn set_position_polar(&mut self, loc: &str, dist: f64, bearing_deg: f64) {
        let p = Point::polar(dist, bearing_deg);
        self.set_position(loc, p.x, p.y);
    }

    /// Remove all locations, positions, and links.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Iterator over a map's locations, in registration order.
#[derive(Clone, Debug)]
pub struct Locations<'m> {
    inner: indexmap::map::Keys<'m, String, Node>,
}

impl<'m> Iterator for Locations<'m> {
    type Item = &'m str;

    #[inline]
    fn next(&mut self) -> Option<&'m str> {
        self.inner.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Locations<'_> {}

/// Iterator over the locations on one side of a location's links, in link
/// registration order.
#[derive(Clone, Debug)]
pub struct Neighbors<'m> {
    map: &'m RoadMap,
    ids: std::slice::Iter<'m, u32>,
    origins: bool,
}

impl<'m> Iterator for Neighbors<'m> {
    type Item = &'m str;

    #[inline]
    fn next(&mut self) -> Option<&'m str> {
        let map = self.map;
        let link = &map.links[*self.ids.next()? as usize];
        Some(map.name(if self.origins { link.from } else { link.to }))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

// ---------------------------------------------------------------------------
// Serde: a map serializes as its location and link lists, registration order
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MapData {
    locations: Vec<(String, Option<Point>)>,
    links: Vec<(String, String, f64)>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for RoadMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let locations = self
            .nodes
            .iter()
            .map(|(name, node)| (name.clone(), node.pos))
            .collect();
        let links = self
            .links
            .iter()
            .map(|l| (self.name(l.from).to_owned(), self.name(l.to).to_owned(), l.weight))
            .collect();
        MapData { locations, links }.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RoadMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = MapData::deserialize(deserializer)?;
        let mut map = RoadMap::new();
        for (loc, pos) in &data.locations {
            map.intern(loc);
            if let Some(p) = pos {
                map.set_position(loc, p.x, p.y);
            }
        }
        for (from, to, weight) in &data.links {
            map.add_one_way(from, to, *weight);
        }
        Ok(map)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn map_round_trip() {
        let mut m = RoadMap::new();
        m.set_position("A", 0.0, 0.0);
        m.set_position("B", 3.0, 4.0);
        m.add_two_way("A", "B", 5.0);
        m.add_one_way("A", "C", 2.0);
        m.add_one_way("A", "C", 9.0);

        let json = serde_json::to_string(&m).unwrap();
        let back: RoadMap = serde_json::from_str(&json).unwrap();

        assert_eq!(m, back);
        // Registration orders survive the round trip.
        let locs: Vec<_> = back.locations().collect();
        assert_eq!(locs, ["A", "B", "C"]);
        let next: Vec<_> = back.next_locations("A").collect();
        assert_eq!(next, ["B", "C", "C"]);
        assert_eq!(back.distance("A", "C"), Some(2.0));
        assert_eq!(back.position("B"), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn round_trip_keeps_interleaved_reverse_order() {
        // X is entered from B first, then A, while A registered before B.
        let mut m = RoadMap::new();
        m.add_one_way("A", "Q", 1.0);
        m.add_one_way("B", "X", 2.0);
        m.add_one_way("A", "X", 3.0);
        let before: Vec<_> = m.prev_locations("X").collect();
        assert_eq!(before, ["B", "A"]);

        let json = serde_json::to_string(&m).unwrap();
        let back: RoadMap = serde_json::from_str(&json).unwrap();

        assert_eq!(m, back);
        let after: Vec<_> = back.prev_locations("X").collect();
        assert_eq!(after, ["B", "A"]);
    }
}
