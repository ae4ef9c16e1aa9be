//! GeoJSON to TopoJSON conversion.
//!
//! TopoJSON stores each shared boundary once: rings are cut at junction
//! points (where different boundaries meet), the resulting arcs are
//! deduplicated across features in either orientation, and rings reference
//! arcs by index (`~index` for reversed traversal). Arcs are additionally
//! simplified under the topology tolerance, so borders shared by two
//! countries simplify identically on both sides.

use crate::types::CountryFeature;
use geo::{Coord, LineString, Simplify};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};

// Coordinates are compared bit-for-bit; shared borders in the source
// dataset carry identical vertices.
type Key = (u64, u64);

fn key(c: &Coord<f64>) -> Key {
    (c.x.to_bits(), c.y.to_bits())
}

struct ArcStore {
    tolerance: f64,
    index: HashMap<Vec<Key>, usize>,
    arcs: Vec<Vec<Coord<f64>>>,
}

impl ArcStore {
    fn new(tolerance: f64) -> Self {
        ArcStore {
            tolerance,
            index: HashMap::new(),
            arcs: Vec::new(),
        }
    }

    /// Returns the arc reference for this coordinate run, reusing an
    /// existing arc when one matches forward (`i`) or reversed (`!i`).
    fn intern(&mut self, coords: Vec<Coord<f64>>) -> i64 {
        let forward: Vec<Key> = coords.iter().map(key).collect();
        if let Some(&i) = self.index.get(&forward) {
            return i as i64;
        }
        let reversed: Vec<Key> = forward.iter().rev().copied().collect();
        if let Some(&i) = self.index.get(&reversed) {
            return !(i as i64);
        }

        let i = self.arcs.len();
        self.index.insert(forward, i);
        // Douglas-Peucker keeps arc endpoints, so junctions stay put.
        let simplified = LineString::new(coords.clone()).simplify(&self.tolerance).0;
        self.arcs.push(if degenerate(&simplified) {
            // A ring smaller than the tolerance would collapse to nothing
            // and the feature would vanish from the output; keep the
            // original coordinates instead.
            coords
        } else {
            simplified
        });
        i as i64
    }
}

/// A closed arc needs at least four positions to bound area; an open arc
/// needs two distinct endpoints.
fn degenerate(arc: &[Coord<f64>]) -> bool {
    match (arc.first(), arc.last()) {
        (Some(first), Some(last)) if key(first) == key(last) => arc.len() < 4,
        (Some(_), Some(_)) => arc.len() < 2,
        _ => true,
    }
}

/// Opens a closed ring by dropping the duplicated closing coordinate.
fn open_ring(ring: &LineString<f64>) -> Vec<Coord<f64>> {
    let mut coords = ring.0.clone();
    if coords.len() > 1 && key(&coords[0]) == key(coords.last().unwrap()) {
        coords.pop();
    }
    coords
}

fn rings_of(feature: &CountryFeature) -> Vec<Vec<Coord<f64>>> {
    let mut rings = Vec::new();
    for polygon in &feature.geometry.0 {
        rings.push(open_ring(polygon.exterior()));
        for interior in polygon.interiors() {
            rings.push(open_ring(interior));
        }
    }
    rings
}

/// A point is a junction when its neighbor pairs differ between
/// occurrences: interior points of a border shared by two rings see the
/// same neighbors on both sides, the border's endpoints do not.
fn find_junctions(rings: &[Vec<Coord<f64>>]) -> HashSet<Key> {
    let mut neighbor_sets: HashMap<Key, HashSet<(Key, Key)>> = HashMap::new();

    for ring in rings {
        let n = ring.len();
        if n < 3 {
            continue;
        }
        for i in 0..n {
            let point = key(&ring[i]);
            let prev = key(&ring[(i + n - 1) % n]);
            let next = key(&ring[(i + 1) % n]);
            let pair = if prev <= next { (prev, next) } else { (next, prev) };
            neighbor_sets.entry(point).or_default().insert(pair);
        }
    }

    neighbor_sets
        .into_iter()
        .filter(|(_, pairs)| pairs.len() > 1)
        .map(|(point, _)| point)
        .collect()
}

/// Cuts one ring into arcs at the junction points and interns each arc.
fn cut_ring(ring: &[Coord<f64>], junctions: &HashSet<Key>, store: &mut ArcStore) -> Vec<i64> {
    let n = ring.len();
    let first_junction = ring.iter().position(|c| junctions.contains(&key(c)));

    let Some(start) = first_junction else {
        // No junction touches this ring: emit it whole as one closed arc.
        let mut closed = ring.to_vec();
        closed.push(ring[0]);
        return vec![store.intern(closed)];
    };

    let rotated: Vec<Coord<f64>> = ring[start..].iter().chain(&ring[..start]).copied().collect();

    let mut refs = Vec::new();
    let mut current = vec![rotated[0]];
    for i in 1..=n {
        let point = if i == n { rotated[0] } else { rotated[i] };
        current.push(point);
        if i == n || junctions.contains(&key(&point)) {
            refs.push(store.intern(current));
            current = vec![point];
        }
    }
    refs
}

/// Builds the TopoJSON `Topology` document for the collection, with one
/// `countries` GeometryCollection object.
pub fn build_topology(features: &[CountryFeature], tolerance: f64) -> Value {
    let all_rings: Vec<Vec<Coord<f64>>> = features.iter().flat_map(|f| rings_of(f)).collect();
    let junctions = find_junctions(&all_rings);

    let mut store = ArcStore::new(tolerance);
    let mut geometries = Vec::new();

    for feature in features {
        let mut polygons = Vec::new();
        for polygon in &feature.geometry.0 {
            let mut ring_refs = Vec::new();
            let exterior = open_ring(polygon.exterior());
            ring_refs.push(cut_ring(&exterior, &junctions, &mut store));
            for interior in polygon.interiors() {
                let ring = open_ring(interior);
                ring_refs.push(cut_ring(&ring, &junctions, &mut store));
            }
            polygons.push(ring_refs);
        }

        geometries.push(json!({
            "type": "MultiPolygon",
            "arcs": polygons,
            "properties": {
                "COUNTRY_NA": feature.name,
                "iso3": feature.iso3,
                "continent": feature.continent,
                "region": feature.region,
            },
        }));
    }

    let arcs: Vec<Vec<[f64; 2]>> = store
        .arcs
        .into_iter()
        .map(|arc| arc.into_iter().map(|c| [c.x, c.y]).collect())
        .collect();

    json!({
        "type": "Topology",
        "objects": {
            "countries": {
                "type": "GeometryCollection",
                "geometries": geometries,
            }
        },
        "arcs": arcs,
    })
}
