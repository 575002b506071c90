/// A city as declared in the coordinate file: a 1-based identifier and a
/// pair of planar coordinates. Cities are only needed while the distance
/// matrix is being built and are dropped afterwards.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn distance_to(&self, other: &City) -> f64 {
        return ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt();
    }
}

/// The expected shape of one of the two input files: how many header lines
/// to skip (their content is never interpreted) and how many whitespace
/// separated tokens each data record carries.
pub struct FileLayout {
    pub header_lines: usize,
    pub tokens_per_record: usize,
}

pub enum TSPFileKind {
    NodeCoord,
    Tour,
}

impl TSPFileKind {
    pub fn layout(&self) -> FileLayout {
        match self {
            TSPFileKind::NodeCoord => {
                // NAME, TYPE, COMMENT, DIMENSION, EDGE_WEIGHT_TYPE,
                // NODE_COORD_SECTION; then one `<id> <x> <y>` record per city.
                return FileLayout {
                    header_lines: 6,
                    tokens_per_record: 3,
                };
            }
            TSPFileKind::Tour => {
                // NAME, TYPE, COMMENT, DIMENSION, TOUR_SECTION; then the
                // visiting order as whitespace separated city ids.
                return FileLayout {
                    header_lines: 5,
                    tokens_per_record: 1,
                };
            }
        }
    }

    pub fn to_string(&self) -> String {
        match self {
            TSPFileKind::NodeCoord => {
                return "city coordinate file".to_string();
            }
            TSPFileKind::Tour => {
                return "tour file".to_string();
            }
        }
    }
}

/// What `--json` prints: one line that downstream tooling can parse instead
/// of the plain `distance:` line.
#[derive(serde::Serialize)]
pub struct TourVerification {
    pub num_cities: u64,
    pub tot_distance: f64,
}

#[cfg(test)]
mod tests {
    use super::City;

    #[test]
    fn distance_follows_the_three_four_five_triangle() {
        let a = City {
            id: 1,
            x: 0.0,
            y: 0.0,
        };
        let b = City {
            id: 2,
            x: 3.0,
            y: 4.0,
        };

        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric_and_zero_for_same_city() {
        let a = City {
            id: 1,
            x: -2.5,
            y: 7.25,
        };
        let b = City {
            id: 2,
            x: 0.125,
            y: -3.0,
        };

        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&a), 0.0);
    }
}
