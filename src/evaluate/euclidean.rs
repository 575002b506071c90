use ndarray::Array2;

use crate::types::City;

/// Builds the all-pairs Euclidean distance matrix, indexed by the order the
/// cities were read (not by their declared ids). `Array2` keeps the values
/// in one contiguous row-major block, and `zeros` already covers the
/// diagonal, so only the upper triangle needs computing.
pub fn build_distance_matrix(cities: &[City]) -> Array2<f64> {
    let num_cities = cities.len();
    let mut distance_matrix = Array2::zeros((num_cities, num_cities));

    for i in 0..num_cities {
        for j in i + 1..num_cities {
            let distance = cities[i].distance_to(&cities[j]);
            distance_matrix[[i, j]] = distance;
            distance_matrix[[j, i]] = distance;
        }
    }

    return distance_matrix;
}
