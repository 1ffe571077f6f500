use std::io::{self, BufRead, Write};

use bikeshare_core::{City, DayFilter, FilterSelection, MonthFilter};

pub const RULE: &str = "----------------------------------------";

/// Filter values already supplied on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preset {
    pub city: Option<City>,
    pub month: Option<MonthFilter>,
    pub day: Option<DayFilter>,
}

/// Asks for whatever `preset` leaves open, re-prompting until each answer is
/// one of the accepted values.
pub fn collect_filters<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    preset: Preset,
) -> io::Result<FilterSelection> {
    writeln!(output, "Hello! Let's explore some US bikeshare data!")?;

    let city = match preset.city {
        Some(city) => city,
        None => ask(
            input,
            output,
            "Enter the city (Chicago, New York City, Washington): ",
            "Invalid city. Please try again.",
        )?,
    };
    let month = match preset.month {
        Some(month) => month,
        None => ask(
            input,
            output,
            "Enter the month (January, February, ... , June), or 'all' for all months: ",
            "Invalid month. Please try again.",
        )?,
    };
    let day = match preset.day {
        Some(day) => day,
        None => ask(
            input,
            output,
            "Enter the day of the week (Monday, Tuesday, ... Sunday), or 'all' for all days: ",
            "Invalid day. Please try again.",
        )?,
    };

    writeln!(output, "{RULE}")?;
    Ok(FilterSelection::new(city, month, day))
}

fn ask<R, W, T>(input: &mut R, output: &mut W, question: &str, invalid: &str) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    T: for<'a> TryFrom<&'a str, Error = String>,
{
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a selection was made",
            ));
        }

        match T::try_from(line.as_str()) {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "{invalid}")?,
        };
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bikeshare_core::Month;
    use chrono::Weekday;

    use super::*;

    fn run(script: &str, preset: Preset) -> (io::Result<FilterSelection>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = collect_filters(&mut input, &mut output, preset);
        (result, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn reprompts_until_answers_are_valid() {
        let script = "boston\nNew York City\njuly\nMarch\nmon\nFriday\n";
        let (result, transcript) = run(script, Preset::default());

        let selection = result.expect("selection");
        assert_eq!(selection.city, City::NewYorkCity);
        assert_eq!(selection.month, MonthFilter::Only(Month::March));
        assert_eq!(selection.day, DayFilter::Only(Weekday::Fri));
        assert_eq!(transcript.matches("Invalid city").count(), 1);
        assert_eq!(transcript.matches("Invalid month").count(), 1);
        assert_eq!(transcript.matches("Invalid day").count(), 1);
        assert!(transcript.ends_with(&format!("{RULE}\n")));
    }

    #[test]
    fn accepts_all_for_month_and_day() {
        let (result, _) = run("washington\nALL\nall\n", Preset::default());
        let selection = result.expect("selection");
        assert_eq!(selection.month, MonthFilter::All);
        assert_eq!(selection.day, DayFilter::All);
    }

    #[test]
    fn preset_values_skip_their_prompts() {
        let preset = Preset {
            city: Some(City::Chicago),
            month: None,
            day: Some(DayFilter::All),
        };
        let (result, transcript) = run("june\n", preset);

        let selection = result.expect("selection");
        assert_eq!(selection.city, City::Chicago);
        assert_eq!(selection.month, MonthFilter::Only(Month::June));
        assert!(!transcript.contains("Enter the city"));
        assert!(!transcript.contains("Enter the day"));
    }

    #[test]
    fn ask_trims_the_answer_and_prompts_once() {
        let mut input = Cursor::new(b"  Chicago  \n".to_vec());
        let mut output = Vec::new();
        let city: City = ask(&mut input, &mut output, "? ", "bad").expect("city");
        assert_eq!(city, City::Chicago);
        assert_eq!(output, b"? ".to_vec());
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = run("chicago\n", Preset::default());
        let err = result.expect_err("eof should fail");
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
