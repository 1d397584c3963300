//! Population management: survivor selection, reproduction, aging.
//!
//! The [`Population`] is owned exclusively by the optimizer. One generation
//! touches it in a fixed order: sort and cap, crossover pass, mutation
//! pass, aging pass. The crossover pass is additive — parents stay in the
//! population alongside their offspring — so the population grows between
//! caps and is pruned back at the start of the next generation.

use crate::instance::Instance;
use crate::tour::Tour;
use rand::Rng;

/// An ordered collection of tours.
#[derive(Debug, Clone)]
pub struct Population {
    tours: Vec<Tour>,
}

impl Population {
    /// Builds a population of `size` random tours over the instance.
    pub fn random<R: Rng>(
        instance: &Instance,
        size: usize,
        mutation_probability: u8,
        rng: &mut R,
    ) -> Self {
        let tours = (0..size)
            .map(|_| Tour::random(instance.len(), mutation_probability, rng))
            .collect();
        Self { tours }
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Iterates the tours in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &Tour> {
        self.tours.iter()
    }

    /// Sorts ascending by tour length (stable, so equal-length tours keep
    /// their relative order), then truncates to `cap`, discarding the
    /// worst-ranked tours.
    ///
    /// Lengths are computed once per tour for the whole pass.
    pub fn sort_and_cap(&mut self, instance: &Instance, cap: usize) {
        let mut keyed: Vec<(f64, Tour)> = self
            .tours
            .drain(..)
            .map(|tour| (tour.length(instance), tour))
            .collect();
        keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        keyed.truncate(cap);
        self.tours = keyed.into_iter().map(|(_, tour)| tour).collect();
    }

    /// Reproduction: walks the population in non-overlapping adjacent
    /// pairs `(0,1), (2,3), …`, producing two offspring per pair. Each
    /// offspring gets one mutation attempt and is appended; parents are
    /// retained. An odd trailing member sits this generation out.
    ///
    /// Call after [`sort_and_cap`](Self::sort_and_cap) so the fittest
    /// tours pair with their nearest rivals.
    pub fn crossover_pass<R: Rng>(&mut self, rng: &mut R) {
        let parents = self.tours.len();
        let mut offspring = Vec::with_capacity(parents);

        let mut i = 0;
        while i + 1 < parents {
            let (first, second) = (&self.tours[i], &self.tours[i + 1]);
            let (r1, r2) = first.crossover(second, rng);

            let mut child1 = Tour::from_route(r1, first.mutation_probability());
            let mut child2 = Tour::from_route(r2, second.mutation_probability());
            child1.mutate(rng);
            child2.mutate(rng);

            offspring.push(child1);
            offspring.push(child2);
            i += 2;
        }

        self.tours.extend(offspring);
    }

    /// One mutation attempt for every tour, parents and offspring alike.
    /// Each tour rolls its own probability independently.
    pub fn mutation_pass<R: Rng>(&mut self, rng: &mut R) {
        for tour in &mut self.tours {
            tour.mutate(rng);
        }
    }

    /// Removes every tour whose age exceeds `max_life_time`; every
    /// survivor ages by one generation.
    pub fn age_pass(&mut self, max_life_time: u32) {
        self.tours.retain_mut(|tour| {
            if tour.age() > max_life_time {
                false
            } else {
                tour.grow_older();
                true
            }
        });
    }

    /// The tour with the lowest length: the first minimum in population
    /// order, equivalent to sorting and taking the front element. Does not
    /// reorder the population.
    ///
    /// # Panics
    /// Panics if the population is empty; the optimizer's construction and
    /// pass ordering keep it non-empty.
    pub fn best(&self, instance: &Instance) -> &Tour {
        let mut iter = self.tours.iter();
        let mut best = iter.next().expect("population must not be empty");
        let mut best_length = best.length(instance);
        for tour in iter {
            let length = tour.length(instance);
            if length < best_length {
                best = tour;
                best_length = length;
            }
        }
        best
    }
}

// ============================================================================
// Tests
// ============================================================================
