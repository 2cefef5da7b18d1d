//! Interactive text menu
//!
//! Reads choices line by line and drives the session. End of input exits.

pub mod render;

use std::io::{self, BufRead, Write};

use crate::models::{ActivityLevel, BmiCategory, Gender};
use crate::nutrition::parse_quantity;
use crate::session::Session;

/// The interactive menu over any line-based input and output
pub struct Menu<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            render::main_menu(&mut self.output)?;
            let Some(choice) = self.read_int("Enter your choice: ")? else {
                break;
            };

            let keep_going = match choice {
                1 => self.setup_profile()?,
                2 => self.calculate_calories()?,
                3 => self.calculate_bmi()?,
                4 => self.track_daily_nutrients()?,
                5 => self.meal_recommendations()?,
                6 => self.nutrition_summary()?,
                7 => {
                    writeln!(self.output, "Thank you for using Personal Diet App!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
            writeln!(self.output, "\n{}\n", "=".repeat(50))?;
        }
        tracing::debug!("Input closed, leaving menu");
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Actions; each returns Ok(false) when input ran out
    // ------------------------------------------------------------------------

    fn setup_profile(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n=== User Profile Setup ===")?;

        let Some(age) = self.read_int("Enter your age: ")? else {
            return Ok(false);
        };
        let Some(gender) = self.read_line("Enter your gender (M/F): ")? else {
            return Ok(false);
        };
        let Some(weight) = self.read_f64("Enter your weight (kg): ")? else {
            return Ok(false);
        };
        let Some(height) = self.read_f64("Enter your height (cm): ")? else {
            return Ok(false);
        };
        render::activity_levels(&mut self.output)?;
        let Some(level) = self.read_int("Choose your activity level (1-5): ")? else {
            return Ok(false);
        };

        let profile = &mut self.session.profile;
        profile.set_age(age);
        profile.set_gender(Gender::from_input(&gender));
        profile.set_weight(weight);
        profile.set_height(height);
        profile.set_activity_level(level);
        tracing::info!("Profile set up (complete: {})", profile.is_complete());

        if let Err(e) = ActivityLevel::try_from(level) {
            writeln!(self.output, "Note: {}", e)?;
        }
        writeln!(self.output, "Profile setup completed!")?;
        Ok(true)
    }

    fn calculate_calories(&mut self) -> io::Result<bool> {
        if !self.session.profile.is_complete() {
            writeln!(self.output, "Please setup your profile first!")?;
            return Ok(true);
        }

        let bmr_and_goals = self
            .session
            .profile
            .bmr()
            .and_then(|bmr| Ok((bmr, self.session.calorie_goals()?)));
        match bmr_and_goals {
            Ok((bmr, goals)) => {
                render::calories(&mut self.output, bmr, &goals, self.session.goal_delta())?
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn calculate_bmi(&mut self) -> io::Result<bool> {
        match self.session.profile.bmi() {
            Ok(bmi) => render::bmi(&mut self.output, bmi, BmiCategory::from_bmi(bmi))?,
            Err(_) => writeln!(
                self.output,
                "Please setup your profile with weight and height first!"
            )?,
        }
        Ok(true)
    }

    fn track_daily_nutrients(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n=== Daily Nutrient Tracker ===")?;

        loop {
            render::tracker_menu(&mut self.output)?;
            let Some(choice) = self.read_int("Choose an option: ")? else {
                return Ok(false);
            };

            match choice {
                1 => {
                    if !self.add_food_item()? {
                        return Ok(false);
                    }
                }
                2 => render::available_foods(&mut self.output, &self.session.reference)?,
                3 => render::daily_intake(&mut self.output, &self.session.ledger)?,
                4 => {
                    self.session.ledger.clear();
                    writeln!(self.output, "Daily intake cleared!")?;
                }
                5 => return Ok(true),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn add_food_item(&mut self) -> io::Result<bool> {
        let Some(name) = self.read_line("Enter food name: ")? else {
            return Ok(false);
        };

        let food = match self.session.lookup_food(&name) {
            Ok(food) => food,
            Err(_) => {
                writeln!(self.output, "Food not found in database. Available foods:")?;
                render::available_foods(&mut self.output, &self.session.reference)?;
                return Ok(true);
            }
        };

        let Some(grams) = self.read_quantity("Enter quantity (grams): ")? else {
            return Ok(false);
        };

        match self.session.ledger.add_entry(food, grams) {
            Ok(_) => writeln!(self.output, "Food added successfully!")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn meal_recommendations(&mut self) -> io::Result<bool> {
        if !self.session.profile.is_complete() {
            writeln!(self.output, "Please setup your profile first!")?;
            return Ok(true);
        }

        match self.session.meal_plan() {
            Ok((daily, split, combos)) => {
                render::recommendations(&mut self.output, daily, &split, &combos)?
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn nutrition_summary(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n=== Nutrition Summary ===")?;
        let summary = self.session.summarize();
        render::nutrition_summary(&mut self.output, &summary)?;
        Ok(true)
    }

    // ------------------------------------------------------------------------
    // Input helpers; None means end of input
    // ------------------------------------------------------------------------

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.next_line()
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_parsed<T, F>(&mut self, prompt: &str, retry: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Option<T>,
    {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        loop {
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            write!(self.output, "{}", retry)?;
            self.output.flush()?;
        }
    }

    fn read_int(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        self.read_parsed(prompt, "Please enter a valid number: ", |s| s.parse().ok())
    }

    fn read_f64(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.read_parsed(prompt, "Please enter a valid number: ", |s| {
            s.parse::<f64>().ok().filter(|v| v.is_finite())
        })
    }

    fn read_quantity(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.read_parsed(
            prompt,
            "Please enter a valid quantity (e.g. 150, 150g, 5 oz): ",
            |s| parse_quantity(s).ok(),
        )
    }
}
