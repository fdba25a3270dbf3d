use crate::data::{Domain, SchedulingOutput};
use itertools::Itertools;

/// Echoes the parsed domain. Useful for tracking the different inputs when
/// running the solver multiple times.
pub fn print_domain(domain: &Domain) {
    println!("Course involvements:");
    for (course, participants) in domain.participants.iter().enumerate() {
        let people = participants
            .iter()
            .map(|&person| domain.person_names[person].as_str())
            .join(", ");
        println!("{}: {}", domain.course_names[course], people);
    }
    println!();
    println!("Person availability:");
    for (person, free) in domain.availability.iter().enumerate() {
        let hours = free
            .iter()
            .enumerate()
            .filter(|(_, &ok)| ok)
            .map(|(hour, _)| domain.hour_names[hour].as_str())
            .join(", ");
        println!("{:>20}: {}", domain.person_names[person], hours);
    }
    println!();
}

/// Prints every winning schedule, hour by hour, or a note that the search
/// came up empty.
pub fn print_results(domain: &Domain, output: &SchedulingOutput) {
    let Some(best_score) = output.best_score else {
        println!("No solutions found.");
        return;
    };
    println!(
        "Found {} solutions; {} tied at the best score.",
        output.solution_count,
        output.best_schedules.len()
    );
    for (n, schedule) in output.best_schedules.iter().enumerate() {
        println!("Best schedule (score = {}) no. {}:", best_score, n);
        for (hour, courses) in schedule.iter().enumerate() {
            println!("{:>20}: {}", domain.hour_names[hour], courses.iter().join(" "));
        }
        println!("------------------");
    }
}
