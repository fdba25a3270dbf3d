use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Type aliases for clarity
pub type PersonId = usize;
pub type CourseId = usize;
pub type HourId = usize;

/// A (possibly partial) assignment of courses to hours: one entry per hour,
/// holding the courses placed there.
pub type Schedule = Vec<Vec<CourseId>>;

// Marker in the availability table meaning "free at this hour".
const FREE_FLAG: &str = "Y";

/// The immutable scheduling domain: name rosters, per-course participant
/// lists, and the base availability matrix. Built once from input, read-only
/// afterwards; owns all names, everything else refers to it by dense index.
#[derive(Debug, Clone)]
pub struct Domain {
    pub person_names: Vec<String>,
    pub course_names: Vec<String>,
    pub hour_names: Vec<String>,
    /// person -> hour -> free?
    pub availability: Vec<Vec<bool>>,
    /// course -> required participants, teacher first
    pub participants: Vec<Vec<PersonId>>,
}

/// A person with their per-hour availability bits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSpec {
    pub name: String,
    pub free: Vec<bool>,
}

/// A course and the people who must attend it. The first participant is the
/// course's teacher, which the scoring pass depends on.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSpec {
    pub name: String,
    pub participants: Vec<String>,
}

/// The complete input for the scheduling problem.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingRequest {
    pub hours: Vec<String>,
    pub persons: Vec<PersonSpec>,
    pub courses: Vec<CourseSpec>,
}

/// The final output of the solver: how many valid schedules exist, the best
/// (lowest) idle-gap score, and every schedule achieving it. `best_score` is
/// `None` exactly when no valid schedule exists, which is distinct from a
/// best score of zero.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingOutput {
    pub solution_count: usize,
    pub best_score: Option<i64>,
    /// Each winning schedule as course names per hour, parallel to the hour
    /// roster.
    pub best_schedules: Vec<Vec<Vec<String>>>,
}

impl Domain {
    /// Builds the domain from the two raw input tables.
    ///
    /// The availability table's header row names the hours (its first cell is
    /// a label and is ignored); each body row is a person name followed by
    /// per-hour flags, where `"Y"` means free and anything else, including a
    /// missing trailing cell, means unavailable. The roster table's header
    /// row names the courses, one per column; reading down a column yields
    /// that course's participants in order, so the first body row supplies
    /// each course's teacher. Cells naming unknown persons are skipped.
    pub fn from_tables(
        availability_table: &[Vec<String>],
        roster_table: &[Vec<String>],
    ) -> Result<Self, String> {
        let Some((availability_header, person_rows)) = availability_table.split_first() else {
            return Err("availability table is missing its header row".to_string());
        };
        let hour_names: Vec<String> = availability_header.iter().skip(1).cloned().collect();

        let mut person_names = Vec::new();
        let mut availability = Vec::new();
        for row in person_rows {
            let Some((name, flags)) = row.split_first() else {
                continue;
            };
            person_names.push(name.clone());
            // Short rows pad out as unavailable; extra cells are ignored.
            let mut free: Vec<bool> = flags.iter().map(|cell| cell == FREE_FLAG).collect();
            free.resize(hour_names.len(), false);
            availability.push(free);
        }

        let Some((roster_header, participant_rows)) = roster_table.split_first() else {
            return Err("roster table is missing its header row".to_string());
        };
        let course_names: Vec<String> = roster_header.clone();

        let person_ids = index_by_name(&person_names);
        let mut participants: Vec<Vec<PersonId>> = vec![Vec::new(); course_names.len()];
        for row in participant_rows {
            for (course, cell) in row.iter().enumerate().take(course_names.len()) {
                if cell.is_empty() {
                    continue;
                }
                match person_ids.get(cell.as_str()) {
                    Some(&person) => participants[course].push(person),
                    None => warn!(
                        "Roster names unknown person {:?} for course {:?}; skipping.",
                        cell, course_names[course]
                    ),
                }
            }
        }

        Ok(Self {
            person_names,
            course_names,
            hour_names,
            availability,
            participants,
        })
    }

    /// Builds the domain from a JSON scheduling request, with the same
    /// recovery rules as the table path: short availability rows pad out as
    /// unavailable, unknown participant names are skipped.
    pub fn from_request(request: &SchedulingRequest) -> Result<Self, String> {
        let hour_names = request.hours.clone();
        let person_names: Vec<String> = request.persons.iter().map(|p| p.name.clone()).collect();
        let availability: Vec<Vec<bool>> = request
            .persons
            .iter()
            .map(|p| {
                let mut free = p.free.clone();
                free.resize(hour_names.len(), false);
                free
            })
            .collect();

        let person_ids = index_by_name(&person_names);
        let mut course_names = Vec::new();
        let mut participants = Vec::new();
        for course in &request.courses {
            let mut present = Vec::new();
            for name in &course.participants {
                match person_ids.get(name.as_str()) {
                    Some(&person) => present.push(person),
                    None => warn!(
                        "Request names unknown person {:?} for course {:?}; skipping.",
                        name, course.name
                    ),
                }
            }
            course_names.push(course.name.clone());
            participants.push(present);
        }

        Ok(Self {
            person_names,
            course_names,
            hour_names,
            availability,
            participants,
        })
    }

    pub fn num_courses(&self) -> usize {
        self.course_names.len()
    }

    pub fn num_hours(&self) -> usize {
        self.hour_names.len()
    }

    /// The participants required by a course, teacher first.
    pub fn participants(&self, course: CourseId) -> &[PersonId] {
        &self.participants[course]
    }

    /// The person who teaches a course, if its roster matched anyone at all.
    pub fn teacher(&self, course: CourseId) -> Option<PersonId> {
        self.participants[course].first().copied()
    }

    /// A schedule with every hour still empty.
    pub fn empty_schedule(&self) -> Schedule {
        vec![Vec::new(); self.num_hours()]
    }

    /// Resolves a schedule's course ids to names, per hour.
    pub fn schedule_names(&self, schedule: &Schedule) -> Vec<Vec<String>> {
        schedule
            .iter()
            .map(|courses| {
                courses
                    .iter()
                    .map(|&course| self.course_names[course].clone())
                    .collect()
            })
            .collect()
    }
}

// First occurrence wins when a name appears twice, matching a forward scan.
fn index_by_name(names: &[String]) -> HashMap<&str, PersonId> {
    let mut ids = HashMap::new();
    for (id, name) in names.iter().enumerate() {
        ids.entry(name.as_str()).or_insert(id);
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn parses_hours_and_availability_flags() {
        let availability = rows(&[
            &["Name", "Mon", "Tue", "Wed"],
            &["Alice", "Y", "", "Y"],
            &["Bob", "N", "Y", "Y"],
        ]);
        let roster = rows(&[&["Math"]]);
        let domain = Domain::from_tables(&availability, &roster).unwrap();

        assert_eq!(domain.hour_names, vec!["Mon", "Tue", "Wed"]);
        assert_eq!(domain.person_names, vec!["Alice", "Bob"]);
        assert_eq!(domain.availability[0], vec![true, false, true]);
        assert_eq!(domain.availability[1], vec![false, true, true]);
    }

    #[test]
    fn missing_trailing_cell_means_unavailable() {
        // "Alice,Y," splits into a trailing empty cell, which must read as
        // unavailable for the last hour rather than as a shorter row.
        let availability = rows(&[
            &["Name", "Mon", "Tue"],
            &["Alice", "Y", ""],
            &["Bob", "Y"],
        ]);
        let roster = rows(&[&["Math"]]);
        let domain = Domain::from_tables(&availability, &roster).unwrap();

        assert_eq!(domain.availability[0], vec![true, false]);
        // A genuinely short row pads out the same way.
        assert_eq!(domain.availability[1], vec![true, false]);
    }

    #[test]
    fn roster_columns_become_participant_lists_in_row_order() {
        let availability = rows(&[
            &["Name", "Mon"],
            &["Alice", "Y"],
            &["Bob", "Y"],
            &["Carol", "Y"],
        ]);
        let roster = rows(&[
            &["Math", "Art"],
            &["Alice", "Carol"],
            &["Bob", ""],
        ]);
        let domain = Domain::from_tables(&availability, &roster).unwrap();

        assert_eq!(domain.course_names, vec!["Math", "Art"]);
        assert_eq!(domain.participants(0), &[0, 1]);
        assert_eq!(domain.participants(1), &[2]);
        assert_eq!(domain.teacher(0), Some(0));
        assert_eq!(domain.teacher(1), Some(2));
    }

    #[test]
    fn unknown_roster_names_are_dropped() {
        let availability = rows(&[&["Name", "Mon"], &["Alice", "Y"]]);
        let roster = rows(&[&["Math"], &["Alise"], &["Alice"]]);
        let domain = Domain::from_tables(&availability, &roster).unwrap();

        // The misspelled row is skipped, so Alice becomes the teacher.
        assert_eq!(domain.participants(0), &[0]);
    }

    #[test]
    fn request_round_trips_and_pads_short_rows() {
        let json = r#"{
            "hours": ["Mon", "Tue"],
            "persons": [
                {"name": "Alice", "free": [true]},
                {"name": "Bob", "free": [true, true]}
            ],
            "courses": [{"name": "Math", "participants": ["Alice", "Eve", "Bob"]}]
        }"#;
        let request: SchedulingRequest = serde_json::from_str(json).unwrap();
        let domain = Domain::from_request(&request).unwrap();

        assert_eq!(domain.availability[0], vec![true, false]);
        // Eve is unknown and dropped; Alice stays the teacher.
        assert_eq!(domain.participants(0), &[0, 1]);
    }
}
