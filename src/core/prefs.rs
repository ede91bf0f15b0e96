use crate::domain::model::Preferences;
use crate::domain::ports::Console;
use crate::utils::error::Result;

const YES_ANSWERS: [&str; 2] = ["yes", "y"];
const NO_ANSWERS: [&str; 2] = ["no", "n"];

/// Prints the welcome banner and collects the three dietary answers.
///
/// Answering "yes" to an allergy question turns the matching `can_intake_*`
/// flag off. Each question re-prompts until it gets a recognized answer; the
/// loop gives no feedback and never times out.
pub fn collect_preferences<C: Console>(console: &mut C) -> Result<Preferences> {
    console.write_line("Welcome to the Cookie Shop!")?;
    console.write_line("We feed each according to their need.")?;
    console.write_line(
        "We'd hate to trigger an allergic reaction in your body. So please answer the following questions:",
    )?;
    console.write_line("")?;

    let allergic_to_nuts = ask_yes_no(console, "Are you allergic to nuts? ")?;
    let allergic_to_gluten = ask_yes_no(console, "Are you allergic to gluten? ")?;
    let diabetic = ask_yes_no(console, "Do you suffer from diabetes? ")?;

    Ok(Preferences {
        can_intake_nuts: !allergic_to_nuts,
        can_intake_gluten: !allergic_to_gluten,
        can_intake_sugar: !diabetic,
    })
}

/// Accepted answers are exactly `yes`, `y`, `no`, `n` (case-sensitive).
fn ask_yes_no<C: Console>(console: &mut C, question: &str) -> Result<bool> {
    loop {
        let answer = console.prompt(question)?;
        if YES_ANSWERS.contains(&answer.as_str()) {
            return Ok(true);
        }
        if NO_ANSWERS.contains(&answer.as_str()) {
            return Ok(false);
        }
    }
}
