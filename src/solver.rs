use crate::data::{Domain, HourId, PersonId, Schedule, SchedulingOutput};
use itertools::Itertools;
use log::{info, trace};
use std::collections::HashMap;
use std::time::Instant;

/// Enumerates every valid schedule, scores them all, and reports the winners.
pub fn solve(domain: &Domain) -> SchedulingOutput {
    let start_time = Instant::now();
    info!(
        "Starting exhaustive search over {} courses and {} hours...",
        domain.num_courses(),
        domain.num_hours()
    );
    let solutions = enumerate(domain);
    info!(
        "Search finished in {:.2?} with {} valid schedules.",
        start_time.elapsed(),
        solutions.len()
    );
    rank(domain, &solutions)
}

/// Collects every assignment of courses to hours in which no participant is
/// required in two places at once. Deterministic: identical input always
/// yields the solutions in the same order.
pub fn enumerate(domain: &Domain) -> Vec<Schedule> {
    let mut solutions = Vec::new();
    if domain.num_courses() == 0 {
        // Nothing to place, so the empty schedule is the one valid outcome.
        solutions.push(domain.empty_schedule());
        return solutions;
    }
    explore(
        &domain.empty_schedule(),
        &domain.availability,
        0,
        domain,
        &mut solutions,
    );
    solutions
}

/// Recursively tries scheduling all the courses, in order, at all possible
/// hours. Completion time can vary wildly: more conflicts mean more pruning
/// and a dramatically faster (often empty) search, so ordering the
/// harder-to-place courses first in the roster pays off directly.
fn explore(
    schedule: &Schedule,
    availability: &[Vec<bool>],
    depth: usize,
    domain: &Domain,
    solutions: &mut Vec<Schedule>,
) {
    for hour in 0..domain.num_hours() {
        let conflict = domain
            .participants(depth)
            .iter()
            .any(|&person| !availability[person][hour]);
        // If anyone involved is already committed, move on to the next hour.
        if conflict {
            continue;
        }
        // Copies of the schedule and the availability keep this placement
        // from contaminating the remaining hours the course could go at.
        let mut new_schedule = schedule.clone();
        let mut new_availability = availability.to_vec();
        new_schedule[hour].push(depth);
        // Everyone involved in the course is now booked at this hour.
        for &person in domain.participants(depth) {
            new_availability[person][hour] = false;
        }
        if depth + 1 == domain.num_courses() {
            // Every course is placed: a complete, valid schedule.
            solutions.push(new_schedule);
            trace!("Found {} solutions so far...", solutions.len());
            continue;
        }
        explore(&new_schedule, &new_availability, depth + 1, domain, solutions);
    }
}

/// Scores a complete schedule: the total number of hours teachers spend
/// waiting in between their classes. Lower is better.
pub fn calc_score(domain: &Domain, schedule: &Schedule) -> i64 {
    // Figure out which hours each teacher is teaching. Hours come out in
    // ascending order because that is the iteration order here.
    let teacher_hours: HashMap<PersonId, Vec<HourId>> = schedule
        .iter()
        .enumerate()
        .flat_map(|(hour, courses)| {
            courses
                .iter()
                .filter_map(move |&course| domain.teacher(course).map(|teacher| (teacher, hour)))
        })
        .into_group_map();

    teacher_hours
        .values()
        .map(|hours| {
            let first = hours[0];
            let last = hours[hours.len() - 1];
            // Idle hours strictly between the first and last class.
            (last - first + 1 - hours.len()) as i64
        })
        .sum()
}

/// Scores every solution and keeps the ones tied at the minimum, in
/// discovery order. An empty solution set reports as "no solutions", never
/// as a minimum over nothing.
pub fn rank(domain: &Domain, solutions: &[Schedule]) -> SchedulingOutput {
    let scores: Vec<i64> = solutions
        .iter()
        .map(|schedule| calc_score(domain, schedule))
        .collect();
    let Some(&best_score) = scores.iter().min() else {
        return SchedulingOutput {
            solution_count: 0,
            best_score: None,
            best_schedules: Vec::new(),
        };
    };
    let best_schedules = solutions
        .iter()
        .zip(&scores)
        .filter(|(_, &score)| score == best_score)
        .map(|(schedule, _)| domain.schedule_names(schedule))
        .collect_vec();
    info!(
        "Best score {} achieved by {} of {} schedules.",
        best_score,
        best_schedules.len(),
        solutions.len()
    );
    SchedulingOutput {
        solution_count: solutions.len(),
        best_score: Some(best_score),
        best_schedules,
    }
}
