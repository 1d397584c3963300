//! The tour entity: one candidate solution.
//!
//! A [`Tour`] is a closed loop over city indices: position 0 and the last
//! position both hold the depot (index 0), and the positions in between are
//! a permutation of the remaining cities. The genetic operators — crossover
//! and mutation — are defined so that they can never break this shape:
//! crossover only appends cities missing from a valid prefix, and mutation
//! only swaps interior positions.

use crate::instance::Instance;
use rand::seq::SliceRandom;
use rand::Rng;

/// A closed-loop permutation of city indices with its evolutionary
/// bookkeeping (mutation probability and age).
///
/// Tours do not cache their length; [`Tour::length`] recomputes it from the
/// instance on every call. Callers that compare repeatedly should hold on
/// to the result.
#[derive(Debug, Clone)]
pub struct Tour {
    route: Vec<usize>,
    mutation_probability: u8,
    age: u32,
}

impl Tour {
    /// Creates a random valid tour over `cities` cities.
    ///
    /// The depot (index 0) is fixed at both ends; the interior is a
    /// uniformly random permutation of `1..cities`.
    pub fn random<R: Rng>(cities: usize, mutation_probability: u8, rng: &mut R) -> Self {
        let mut interior: Vec<usize> = (1..cities).collect();
        interior.shuffle(rng);

        let mut route = Vec::with_capacity(cities + 1);
        route.push(0);
        route.extend(interior);
        route.push(0);

        Self {
            route,
            mutation_probability,
            age: 0,
        }
    }

    /// Wraps a pre-built route, typically a crossover child.
    ///
    /// No validation is performed; the caller is responsible for supplying
    /// a valid closed-loop permutation.
    pub fn from_route(route: Vec<usize>, mutation_probability: u8) -> Self {
        Self {
            route,
            mutation_probability,
            age: 0,
        }
    }

    /// The index sequence, length `cities + 1`, starting and ending at 0.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Mutation trigger chance in percent (0–100).
    pub fn mutation_probability(&self) -> u8 {
        self.mutation_probability
    }

    /// Generations this tour has survived.
    pub fn age(&self) -> u32 {
        self.age
    }

    pub(crate) fn grow_older(&mut self) {
        self.age += 1;
    }

    /// Order-preserving crossover with `other`.
    ///
    /// A crossover point is drawn uniformly from the interior `[1, len-2]`.
    /// Each child keeps one parent's prefix up to the point, then receives
    /// every missing city in the other parent's visiting order, and closes
    /// the loop with the depot. Both children are valid whenever both
    /// parents are.
    ///
    /// Returns the two child routes; the caller wraps them with
    /// [`Tour::from_route`].
    pub fn crossover<R: Rng>(&self, other: &Tour, rng: &mut R) -> (Vec<usize>, Vec<usize>) {
        let len = self.route.len();
        debug_assert_eq!(len, other.route.len(), "parents must cover the same cities");

        let point = rng.random_range(1..=len - 2);
        (
            splice(&self.route[..point], &other.route, len - 1),
            splice(&other.route[..point], &self.route, len - 1),
        )
    }

    /// One mutation attempt: with `mutation_probability` percent chance,
    /// swaps two interior positions chosen independently at random.
    ///
    /// The two endpoints never move. The chosen positions may coincide, in
    /// which case the route is unchanged.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        if rng.random_range(0..100u8) >= self.mutation_probability {
            return;
        }
        let hi = self.route.len() - 2;
        let i = rng.random_range(1..=hi);
        let j = rng.random_range(1..=hi);
        self.route.swap(i, j);
    }

    /// Total Euclidean length of the closed loop.
    pub fn length(&self, instance: &Instance) -> f64 {
        instance.route_length(&self.route)
    }
}

/// Build one crossover child: copy `prefix`, then append every city of
/// `donor` not already placed, in donor order, then close with the depot.
///
/// Membership is tracked in a boolean table indexed by city, so each
/// crossover costs O(cities).
fn splice(prefix: &[usize], donor: &[usize], cities: usize) -> Vec<usize> {
    let mut placed = vec![false; cities];
    let mut route = Vec::with_capacity(cities + 1);

    for &city in prefix {
        route.push(city);
        placed[city] = true;
    }
    for &city in donor {
        if !placed[city] {
            route.push(city);
            placed[city] = true;
        }
    }
    route.push(0);
    route
}

// ============================================================================
// Tests
// ============================================================================
