use std::io::Write;

use tracing::debug;

use crate::error::GameError;
use crate::io::{Pacing, PlayerInput};
use crate::result::TurnOutcome;

use super::{BEAT, Game, list_cards};

impl<W: Write, I: PlayerInput, P: Pacing> Game<W, I, P> {
    /// Runs the dealer's automated turn: reveal the hole card, then draw
    /// until the fixed policy says stop.
    pub(super) fn dealer_turn(&mut self) -> Result<TurnOutcome, GameError> {
        self.pacing.pause(BEAT);
        writeln!(self.out, "Dealer flips {}\n", self.dealer.cards()[1])?;
        self.pacing.pause(BEAT);

        writeln!(self.out, "Dealer's hand:")?;
        list_cards(&mut self.out, &self.dealer)?;
        self.pacing.pause(BEAT);

        loop {
            let totals = self.dealer.possible_totals();
            writeln!(self.out, "\nDealer's total: {totals}\n")?;
            self.pacing.pause(BEAT);

            // Standing on a reachable 17 outranks every other reading, even
            // when a soft Ace could still make 18 through 21.
            if totals.contains(17) {
                writeln!(self.out, "Dealer stands at 17")?;
                self.pacing.pause(BEAT);
                debug!(total = 17, "dealer stands");
                return Ok(TurnOutcome::Stand(17));
            }

            if totals.all_below(17) {
                let card = self.draw()?;
                self.dealer.add_card(card);
                writeln!(self.out, "Dealer drew: {card}")?;
                self.pacing.pause(BEAT);

                let totals = self.dealer.possible_totals();
                if totals.is_bust() {
                    writeln!(self.out, "Dealer total: {}\n", totals.best())?;
                    self.pacing.pause(BEAT);
                    debug!(total = totals.best(), "dealer busts");
                    return Ok(TurnOutcome::Bust);
                }
            } else {
                let total = totals.best();
                writeln!(self.out, "Dealer stands at {total}.\n")?;
                self.pacing.pause(BEAT);
                debug!(total, "dealer stands");
                return Ok(TurnOutcome::Stand(total));
            }
        }
    }
}
