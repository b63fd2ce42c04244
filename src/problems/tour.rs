//! Closed Euclidean tour over a table of cities (travelling salesman).
//!
//! The genome is a permutation of city indices. Fitness is the reciprocal
//! of the closed tour length, so shorter tours score higher.

use crate::error::ConfigError;
use crate::ga::operators::{order_crossover, swap_mutation};
use crate::ga::{GaProblem, Stagnation, DEFAULT_FITNESS_TOLERANCE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound on tour fitness.
///
/// A tour of length zero (a single city, or all cities coincident) would
/// otherwise score `1 / 0`. Capping keeps every fitness finite, so roulette
/// totals and comparisons stay well defined.
pub const MAX_TOUR_FITNESS: f64 = 1e12;

/// A city position in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A tour problem over a fixed city table.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::GaProblem;
/// use u_evolve::problems::{City, Tour};
///
/// let square = Tour::new(vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ]);
/// assert_eq!(square.tour_length(&[0, 1, 2, 3]), 4.0);
/// assert_eq!(square.evaluate(&vec![0, 1, 2, 3]), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<City>,
}

impl Tour {
    /// Creates a tour problem. The table is checked by
    /// [`GaProblem::validate`] when a run starts.
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Builds a tour problem from `(x, y)` pairs.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Self {
        Self::new(coordinates.iter().map(|&(x, y)| City::new(x, y)).collect())
    }

    /// Six cities on a 10×10 grid.
    pub fn six_cities() -> Self {
        Self::from_coordinates(&[
            (0.0, 0.0),
            (1.0, 5.0),
            (5.0, 2.0),
            (6.0, 6.0),
            (8.0, 3.0),
            (7.0, 9.0),
        ])
    }

    /// Ten cities on a 35×30 grid.
    pub fn ten_cities() -> Self {
        Self::from_coordinates(&[
            (0.0, 0.0),
            (3.0, 14.0),
            (12.0, 5.0),
            (7.0, 18.0),
            (20.0, 3.0),
            (15.0, 25.0),
            (25.0, 10.0),
            (30.0, 20.0),
            (22.0, 30.0),
            (35.0, 5.0),
        ])
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Length of the closed tour visiting `route` in order and returning
    /// to the first city.
    pub fn tour_length(&self, route: &[usize]) -> f64 {
        match route {
            [] | [_] => 0.0,
            [first, .., last] => {
                let open: f64 = route
                    .windows(2)
                    .map(|w| self.cities[w[0]].distance(&self.cities[w[1]]))
                    .sum();
                open + self.cities[*last].distance(&self.cities[*first])
            }
        }
    }
}

/// Renders a route as `0 -> 2 -> 1 -> 0`, closing the loop.
pub fn format_route(route: &[usize]) -> String {
    let mut out = route
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    if let Some(first) = route.first() {
        out.push_str(&format!(" -> {first}"));
    }
    out
}

impl GaProblem for Tour {
    type Genome = Vec<usize>;

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cities.is_empty() {
            return Err(ConfigError::NoCities);
        }
        if let Some(index) = self
            .cities
            .iter()
            .position(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(ConfigError::NonFiniteCity { index });
        }
        Ok(())
    }

    fn create_genome<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut route: Vec<usize> = (0..self.city_count()).collect();
        route.shuffle(rng);
        route
    }

    fn evaluate(&self, genome: &Vec<usize>) -> f64 {
        let length = self.tour_length(genome);
        if length > 0.0 {
            (1.0 / length).min(MAX_TOUR_FITNESS)
        } else {
            MAX_TOUR_FITNESS
        }
    }

    fn crossover<R: Rng + ?Sized>(
        &self,
        parent_a: &Vec<usize>,
        parent_b: &Vec<usize>,
        rng: &mut R,
    ) -> Vec<usize> {
        order_crossover(parent_a, parent_b, rng)
    }

    /// At most one swap per individual.
    fn mutate<R: Rng + ?Sized>(&self, genome: &mut Vec<usize>, mutation_rate: f64, rng: &mut R) {
        if rng.random::<f64>() < mutation_rate {
            swap_mutation(genome, rng);
        }
    }

    fn default_stagnation(&self) -> Stagnation {
        Stagnation::BestFitnessWithin(DEFAULT_FITNESS_TOLERANCE)
    }
}
