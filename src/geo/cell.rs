// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Committed leaf cells and their membership tests.

use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};

use crate::error::{QuestError, Result};
use crate::types::Coordinate;

const TAG_POLYGON: u8 = 1;
const TAG_BOUNDS: u8 = 2;
const TAG_DISK: u8 = 3;

/// One atomic geographic sub-area of a quest commitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    /// Simple polygon, tested with even-odd ray casting in the lat/lon plane.
    Polygon { vertices: Vec<Coordinate> },
    /// Coordinate bucket. `west > east` means the bucket crosses the antimeridian.
    Bounds {
        south: f64,
        west: f64,
        north: f64,
        east: f64,
    },
    /// All points within `radius_m` meters (great-circle) of `center`.
    Disk { center: Coordinate, radius_m: f64 },
}

impl Cell {
    /// Rejects cells that can never be tested meaningfully.
    pub fn validate(&self) -> Result<()> {
        match self {
            Cell::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err(QuestError::InvalidGeometry(format!(
                        "polygon cell needs at least 3 vertices, got {}",
                        vertices.len()
                    )));
                }
            }
            Cell::Bounds { south, north, .. } => {
                if south > north {
                    return Err(QuestError::InvalidGeometry(format!(
                        "bounds cell has south {} above north {}",
                        south, north
                    )));
                }
            }
            Cell::Disk { radius_m, .. } => {
                if !radius_m.is_finite() || *radius_m < 0.0 {
                    return Err(QuestError::InvalidGeometry(format!(
                        "disk cell radius {} is not a finite non-negative distance",
                        radius_m
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn contains(&self, p: Coordinate) -> bool {
        match self {
            Cell::Polygon { vertices } => polygon_contains(vertices, p),
            Cell::Bounds {
                south,
                west,
                north,
                east,
            } => {
                let lat_ok = *south <= p.latitude && p.latitude <= *north;
                let lon_ok = if west <= east {
                    *west <= p.longitude && p.longitude <= *east
                } else {
                    p.longitude >= *west || p.longitude <= *east
                };
                lat_ok && lon_ok
            }
            Cell::Disk { center, radius_m } => super::distance(*center, p) <= *radius_m,
        }
    }

    /// Canonical byte form fed to the leaf hash.
    ///
    /// ```text
    /// tag (u8)
    /// Polygon: count (u32 LE), then lat/lon (f64 LE) per vertex
    /// Bounds:  south, west, north, east (f64 LE)
    /// Disk:    center lat, center lon, radius_m (f64 LE)
    /// ```
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        match self {
            Cell::Polygon { vertices } => {
                out.push(TAG_POLYGON);
                let mut count = [0u8; 4];
                LittleEndian::write_u32(&mut count, vertices.len() as u32);
                out.extend_from_slice(&count);
                for v in vertices {
                    push_f64(&mut out, v.latitude);
                    push_f64(&mut out, v.longitude);
                }
            }
            Cell::Bounds {
                south,
                west,
                north,
                east,
            } => {
                out.push(TAG_BOUNDS);
                for x in [*south, *west, *north, *east] {
                    push_f64(&mut out, x);
                }
            }
            Cell::Disk { center, radius_m } => {
                out.push(TAG_DISK);
                push_f64(&mut out, center.latitude);
                push_f64(&mut out, center.longitude);
                push_f64(&mut out, *radius_m);
            }
        }
        out
    }
}

fn push_f64(out: &mut Vec<u8>, x: f64) {
    let mut buf = [0u8; 8];
    LittleEndian::write_f64(&mut buf, x);
    out.extend_from_slice(&buf);
}

fn polygon_contains(vertices: &[Coordinate], p: Coordinate) -> bool {
    let (x, y) = (p.longitude, p.latitude);
    let mut inside = false;
    let mut j = vertices.len().wrapping_sub(1);

    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        let (xi, yi) = (vi.longitude, vi.latitude);
        let (xj, yj) = (vj.longitude, vj.latitude);

        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}
