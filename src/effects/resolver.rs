//! Event resolution - applying a square's life-event to a player.
//!
//! The `EventResolver` borrows everything an event can need for the
//! duration of one move: the catalog for card data, the config for odds,
//! the shared RNG, and the player's input and output. Each resolver
//! mutates the player in place and returns an `Outcome`.

use tracing::debug;

use super::outcome::Outcome;
use crate::catalog::{Catalog, EventKind};
use crate::core::{Choice, GameConfig, GameError, GameRng, Player, StartingPath};
use crate::display::{describe_career, describe_education, describe_outcome, event_banner};
use crate::io::{InputProvider, OutputSink};

/// Resolves event squares against a player.
pub struct EventResolver<'a, I, O> {
    catalog: &'a Catalog,
    config: &'a GameConfig,
    rng: &'a mut GameRng,
    input: &'a mut I,
    output: &'a mut O,
}

impl<'a, I: InputProvider, O: OutputSink> EventResolver<'a, I, O> {
    pub fn new(
        catalog: &'a Catalog,
        config: &'a GameConfig,
        rng: &'a mut GameRng,
        input: &'a mut I,
        output: &'a mut O,
    ) -> Self {
        Self {
            catalog,
            config,
            rng,
            input,
            output,
        }
    }

    /// Resolve one event, announcing it and its outcome.
    pub fn resolve(&mut self, kind: EventKind, player: &mut Player) -> Result<Outcome, GameError> {
        self.output.emit(event_banner(kind));

        let outcome = match kind {
            EventKind::Pay => self.resolve_pay(player),
            EventKind::CareerChange => self.resolve_career_change(player)?,
            EventKind::EducationChance => self.resolve_education_chance(player)?,
            EventKind::Relationship => self.resolve_relationship(player)?,
            EventKind::Children => self.resolve_children(player)?,
        };

        debug!(?kind, ?outcome, player = player.name(), "Resolved event");
        self.output
            .emit(&describe_outcome(&outcome, player, self.catalog));
        Ok(outcome)
    }

    /// Paycheck: `round(salary * multiplier)`, nothing when unemployed.
    pub fn resolve_pay(&mut self, player: &mut Player) -> Outcome {
        if player.has_career(self.catalog.unemployed()) {
            return Outcome::PayMissed;
        }
        let amount = player.paycheck(self.catalog);
        player.credit(amount);
        Outcome::Paid { amount }
    }

    /// Draw a career. Unemployed players take it; others may switch.
    pub fn resolve_career_change(&mut self, player: &mut Player) -> Result<Outcome, GameError> {
        self.input
            .request_any_key("Press enter to draw your career card...")?;
        let Some(&drawn) = self.rng.choose(self.catalog.drawable_careers()) else {
            return Ok(Outcome::NothingToDraw {
                kind: EventKind::CareerChange,
            });
        };
        let card = self.catalog.career(drawn);
        self.output
            .emit(&format!("You've drawn:\n{}", describe_career(card)));

        let current = player.career();
        if current == self.catalog.unemployed() {
            player.take_career(drawn);
            return Ok(Outcome::CareerAssigned { career: drawn });
        }
        if current == drawn {
            return Ok(Outcome::CareerUnchanged { career: drawn });
        }

        let prompt = format!("Would you like to switch your career to {}?", card.name);
        match self.input.request_choice(&prompt, &Choice::BOTH)? {
            Choice::Accept => {
                player.take_career(drawn);
                Ok(Outcome::CareerSwitched {
                    from: current,
                    to: drawn,
                })
            }
            Choice::Decline => Ok(Outcome::CareerKept {
                current,
                offered: drawn,
            }),
        }
    }

    /// Draw an education the player may buy. Already-held educations
    /// can be bought again and their bonuses stack.
    pub fn resolve_education_chance(&mut self, player: &mut Player) -> Result<Outcome, GameError> {
        self.input
            .request_any_key("Press enter to draw a college card...")?;
        let Some(&drawn) = self.rng.choose(self.catalog.drawable_educations()) else {
            return Ok(Outcome::NothingToDraw {
                kind: EventKind::EducationChance,
            });
        };
        let card = self.catalog.education(drawn);
        self.output
            .emit(&format!("You've drawn:\n{}", describe_education(card)));

        let prompt = format!(
            "Would you like to receive education at {}? It will cost ${} (these effects do compound and stack)",
            card.name, card.cost
        );
        match self.input.request_choice(&prompt, &Choice::BOTH)? {
            Choice::Accept => {
                player.debit(card.cost);
                player.enroll(card);
                Ok(Outcome::EducationEnrolled {
                    education: drawn,
                    cost: card.cost,
                })
            }
            Choice::Decline => Ok(Outcome::EducationDeclined { education: drawn }),
        }
    }

    /// Offer a marriage attempt decided by a coin flip.
    pub fn resolve_relationship(&mut self, player: &mut Player) -> Result<Outcome, GameError> {
        if player.is_married() {
            return Ok(Outcome::AlreadyMarried);
        }

        let prompt = format!(
            "Do you wish to attempt to get married ({:.0}% chance)?",
            self.config.marriage_odds * 100.0
        );
        match self.input.request_choice(&prompt, &Choice::BOTH)? {
            Choice::Accept => {
                if self.rng.gen_bool(self.config.marriage_odds) {
                    player.marry();
                    Ok(Outcome::Married)
                } else {
                    Ok(Outcome::MarriageFailed)
                }
            }
            Choice::Decline => Ok(Outcome::MarriageDeclined),
        }
    }

    /// Offer married players a try for `0..=max` children.
    pub fn resolve_children(&mut self, player: &mut Player) -> Result<Outcome, GameError> {
        if !player.is_married() {
            return Ok(Outcome::NotMarried);
        }

        let max = self.config.max_children_per_attempt;
        let prompt = format!("Do you want to try for children (outcome 0-{max})?");
        match self.input.request_choice(&prompt, &Choice::BOTH)? {
            Choice::Accept => {
                let count = self.rng.gen_inclusive(0..=max);
                player.add_children(count);
                Ok(Outcome::ChildrenBorn { count })
            }
            Choice::Decline => Ok(Outcome::ChildrenDeclined),
        }
    }

    /// The one-time starting draw, applied without a choice.
    pub fn resolve_starting_path(
        &mut self,
        path: StartingPath,
        player: &mut Player,
    ) -> Result<Outcome, GameError> {
        let outcome = match path {
            StartingPath::StartCareer => {
                self.input
                    .request_any_key("Press enter to draw your career card...")?;
                match self.rng.choose(self.catalog.drawable_careers()) {
                    Some(&career) => {
                        self.output.emit(&format!(
                            "You've drawn:\n{}",
                            describe_career(self.catalog.career(career))
                        ));
                        player.take_career(career);
                        Outcome::CareerAssigned { career }
                    }
                    None => Outcome::NothingToDraw {
                        kind: EventKind::CareerChange,
                    },
                }
            }
            StartingPath::StartEducation => {
                self.input
                    .request_any_key("Press enter to draw a college card...")?;
                match self.rng.choose(self.catalog.drawable_educations()) {
                    Some(&education) => {
                        let card = self.catalog.education(education);
                        self.output
                            .emit(&format!("You've drawn:\n{}", describe_education(card)));
                        player.enroll(card);
                        Outcome::EducationGranted { education }
                    }
                    None => Outcome::NothingToDraw {
                        kind: EventKind::EducationChance,
                    },
                }
            }
        };

        debug!(?path, ?outcome, player = player.name(), "Applied starting draw");
        self.output
            .emit(&describe_outcome(&outcome, player, self.catalog));
        Ok(outcome)
    }
}
