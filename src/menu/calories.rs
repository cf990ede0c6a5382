//! Calorie tracker: in-memory meal log and its menu loop
//!
//! Nothing is persisted; the log lives for one session.

use std::io::{BufRead, Write};

use crate::error::TrackerError;

use super::Prompter;

/// One recorded meal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub name: String,
    pub calories: i64,
}

/// Meals recorded this session, with a running total
#[derive(Debug, Default)]
pub struct CalorieLog {
    meals: Vec<Meal>,
    total: i64,
}

impl CalorieLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, calories: i64) {
        self.total = self.total.saturating_add(calories);
        self.meals.push(Meal {
            name: name.trim().to_string(),
            calories,
        });
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Parse a calorie count typed by the user
pub fn parse_calories(raw: &str) -> Result<i64, TrackerError> {
    raw.trim()
        .parse()
        .map_err(|_| TrackerError::InvalidCalories(raw.to_string()))
}

/// Run the tracker menu until the user exits or input ends
///
/// A non-numeric calorie count ends the session with
/// [`TrackerError::InvalidCalories`].
pub fn run_tracker<R: BufRead, W: Write>(
    log: &mut CalorieLog,
    prompter: &mut Prompter<R, W>,
) -> Result<(), TrackerError> {
    prompter.say("Welcome to the Calorie Tracking App!")?;

    loop {
        prompter.say("")?;
        prompter.say("Menu:")?;
        prompter.say("1. Add a meal (enter calories)")?;
        prompter.say("2. View all meals")?;
        prompter.say("3. View total calories")?;
        prompter.say("4. Exit")?;

        let Some(choice) = prompter.ask("Enter your choice (1-4): ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(name) = prompter.ask("Enter meal name: ")? else { break };
                let Some(raw) = prompter.ask("Enter calories for the meal: ")? else { break };
                let calories = parse_calories(&raw)?;
                log.add(&name, calories);
                tracing::debug!("Recorded meal {:?} ({} calories)", name.trim(), calories);
                prompter.say("Meal added successfully!")?;
            }
            "2" => {
                if log.is_empty() {
                    prompter.say("No meals recorded yet.")?;
                } else {
                    prompter.say("Your calorie entries:")?;
                    for (i, meal) in log.meals().iter().enumerate() {
                        prompter.say(format!(
                            "Meal {}: {} - {} calories",
                            i + 1,
                            meal.name,
                            meal.calories
                        ))?;
                    }
                }
            }
            "3" => prompter.say(format!("Total calories consumed today: {}", log.total()))?,
            "4" => break,
            _ => prompter.say("Invalid choice, please try again.")?,
        }
    }

    prompter.say("Exiting the app. Stay healthy!")?;
    Ok(())
}
