//! Text descriptions of catalog entries, players and outcomes.

use crate::catalog::{Career, Catalog, Education, EventKind};
use crate::core::Player;
use crate::effects::Outcome;

/// Separator printed between sections of a turn.
pub const DIVIDER: &str = "--------------------------------------";

pub fn describe_career(career: &Career) -> String {
    format!("{}\nSalary: ${}\n{}", career.name, career.salary, career.description)
}

pub fn describe_education(education: &Education) -> String {
    format!(
        "{}\n(adds {} to your salary multiplier, costs ${})",
        education.name, education.bonus, education.cost
    )
}

/// Announcement printed when a square fires.
pub fn event_banner(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Pay => "You've hit a Paycheck square!",
        EventKind::CareerChange => "You've hit a Career Change square!",
        EventKind::EducationChance => "You've hit an Education tile!",
        EventKind::Relationship => "You've hit a Romance opportunity tile!",
        EventKind::Children => "You've run into an opportunity to have children!",
    }
}

/// Full info block for the "show info" action.
pub fn describe_player(player: &Player, catalog: &Catalog) -> String {
    let mut text = format!(
        "Player: {}\nBalance: {}\nCareer: {}\nKids: {}\nBoard Position: {}\nAccreditations:",
        player.name(),
        player.balance(),
        catalog.career(player.career()).name,
        player.kids(),
        player.position(),
    );
    for credential in player.credentials() {
        text.push_str("\n\t");
        text.push_str(&catalog.education(credential.education).name);
    }
    text.push_str(&format!("\nSalary multiplier: {:.2}", player.salary_multiplier()));
    text.push_str(if player.is_married() { "\nMarried" } else { "\nUnmarried" });
    text
}

/// Summary printed when a player's turn ends in retirement.
pub fn describe_retirement(player: &Player, catalog: &Catalog) -> String {
    format!(
        "{} reached the end of the game as a(n) {} and retired with a balance of ${}!\nYou also had {} kid(s)!",
        player.name(),
        catalog.career(player.career()).name,
        player.balance(),
        player.kids(),
    )
}

/// Narrative for an event outcome, told to `player`.
pub fn describe_outcome(outcome: &Outcome, player: &Player, catalog: &Catalog) -> String {
    match outcome {
        Outcome::Paid { amount } => format!("{} has received ${}", player.name(), amount),
        Outcome::PayMissed => "If you had a job, you would have gotten paid...".to_string(),
        Outcome::CareerAssigned { career } => {
            format!("{} is now a(n) {}", player.name(), catalog.career(*career).name)
        }
        Outcome::CareerSwitched { to, .. } => {
            format!("You've decided to switch to {}", catalog.career(*to).name)
        }
        Outcome::CareerKept { current, .. } => {
            format!("You've decided to stay a(n) {}", catalog.career(*current).name)
        }
        Outcome::CareerUnchanged { career } => format!(
            "You already are a(n) {}, so moving on!",
            catalog.career(*career).name
        ),
        Outcome::EducationEnrolled { education, cost } => format!(
            "You've decided to receive education at {} and spent ${}",
            catalog.education(*education).name,
            cost
        ),
        Outcome::EducationGranted { education } => format!(
            "{} starts off having studied at {}",
            player.name(),
            catalog.education(*education).name
        ),
        Outcome::EducationDeclined { .. } => {
            "You've decided not to pursue further education".to_string()
        }
        Outcome::NothingToDraw { .. } => "The deck is empty, nothing to draw".to_string(),
        Outcome::Married => "You got married!".to_string(),
        Outcome::MarriageFailed => "You were not successful!".to_string(),
        Outcome::MarriageDeclined => "You passed up on the chance to get married".to_string(),
        Outcome::AlreadyMarried => "However, you are already married!".to_string(),
        Outcome::ChildrenBorn { count: 0 } => {
            "Unfortunately, you did not have any children this time".to_string()
        }
        Outcome::ChildrenBorn { count } => format!("You had {count} kid(s)!"),
        Outcome::ChildrenDeclined => "You chose not to try for children at this time".to_string(),
        Outcome::NotMarried => {
            "Unfortunately, you are not married and don't feel comfortable having kids".to_string()
        }
    }
}
