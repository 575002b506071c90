mod euclidean;

pub use euclidean::build_distance_matrix;

use ndarray::Array2;

/// Sums the distance along a closed tour: every consecutive pair of visits
/// plus the edge returning to the starting city. Tour entries are 1-based
/// city ids; the matrix is indexed by read order.
pub fn calculate_cost_of_tour(tour: &[u64], distances: &Array2<f64>) -> f64 {
    let mut tot_cost = 0.0;

    for pair in tour.windows(2) {
        tot_cost += distances[[(pair[0] - 1) as usize, (pair[1] - 1) as usize]];
    }

    // The salesman returns to the starting city. For a single city this is
    // the zero diagonal entry.
    if let (Some(first), Some(last)) = (tour.first(), tour.last()) {
        tot_cost += distances[[(last - 1) as usize, (first - 1) as usize]];
    }

    return tot_cost;
}

#[cfg(test)]
mod tests {
    use ndarray::Array2;

    use super::{build_distance_matrix, calculate_cost_of_tour};
    use crate::types::City;

    fn unit_square() -> Vec<City> {
        vec![
            City {
                id: 1,
                x: 0.0,
                y: 0.0,
            },
            City {
                id: 2,
                x: 1.0,
                y: 0.0,
            },
            City {
                id: 3,
                x: 1.0,
                y: 1.0,
            },
            City {
                id: 4,
                x: 0.0,
                y: 1.0,
            },
        ]
    }

    #[test]
    fn matrix_is_symmetric_with_a_zero_diagonal() {
        let cities = vec![
            City {
                id: 1,
                x: 0.3,
                y: -1.2,
            },
            City {
                id: 2,
                x: 4.75,
                y: 2.0,
            },
            City {
                id: 3,
                x: -6.5,
                y: 0.0,
            },
            City {
                id: 4,
                x: 1.0,
                y: 1.0,
            },
            City {
                id: 5,
                x: -0.25,
                y: -0.25,
            },
        ];

        let distances = build_distance_matrix(&cities);

        for i in 0..cities.len() {
            assert_eq!(distances[[i, i]], 0.0);
            for j in 0..cities.len() {
                assert_eq!(distances[[i, j]], distances[[j, i]]);
            }
        }
    }

    #[test]
    fn unit_square_in_declared_order_has_perimeter_four() {
        let distances = build_distance_matrix(&unit_square());

        let tot_cost = calculate_cost_of_tour(&[1, 2, 3, 4], &distances);

        assert!((tot_cost - 4.0).abs() < 1e-9);
    }

    #[test]
    fn unit_square_crossing_tour_walks_both_diagonals() {
        let distances = build_distance_matrix(&unit_square());

        let tot_cost = calculate_cost_of_tour(&[1, 3, 2, 4], &distances);

        let expected = 2.0 * std::f64::consts::SQRT_2 + 2.0;
        assert!((tot_cost - expected).abs() < 1e-6);
    }

    #[test]
    fn regular_polygon_tour_is_n_times_the_side_length() {
        let num_cities = 8;
        let cities: Vec<City> = (0..num_cities)
            .map(|i| {
                let angle = (i as f64) * 2.0 * std::f64::consts::PI / (num_cities as f64);
                City {
                    id: (i as u64) + 1,
                    x: angle.cos(),
                    y: angle.sin(),
                }
            })
            .collect();
        let tour: Vec<u64> = (1..=num_cities as u64).collect();
        let side_length = 2.0 * (std::f64::consts::PI / (num_cities as f64)).sin();

        let distances = build_distance_matrix(&cities);
        let tot_cost = calculate_cost_of_tour(&tour, &distances);

        assert!((tot_cost - (num_cities as f64) * side_length).abs() < 1e-9);
    }

    #[test]
    fn single_city_tour_has_zero_length() {
        let cities = vec![City {
            id: 1,
            x: 2.5,
            y: -3.0,
        }];

        let distances = build_distance_matrix(&cities);

        assert_eq!(calculate_cost_of_tour(&[1], &distances), 0.0);
    }

    #[test]
    fn two_city_tour_goes_there_and_back() {
        let cities = vec![
            City {
                id: 1,
                x: 0.0,
                y: 0.0,
            },
            City {
                id: 2,
                x: 3.0,
                y: 4.0,
            },
        ];

        let distances = build_distance_matrix(&cities);

        assert!((calculate_cost_of_tour(&[1, 2], &distances) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn empty_tour_has_zero_length() {
        let distances: Array2<f64> = Array2::zeros((0, 0));

        assert_eq!(calculate_cost_of_tour(&[], &distances), 0.0);
    }
}
