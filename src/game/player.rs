use std::io::Write;

use tracing::debug;

use crate::error::GameError;
use crate::io::{Action, Pacing, PlayerInput};
use crate::result::TurnOutcome;

use super::{BEAT, Game, HALF_BEAT};

impl<W: Write, I: PlayerInput, P: Pacing> Game<W, I, P> {
    /// Runs the player's turn: show totals, prompt, and apply the decision
    /// until the player stands or busts.
    pub(super) fn player_turn(&mut self) -> Result<TurnOutcome, GameError> {
        loop {
            let totals = self.player.possible_totals();
            writeln!(self.out, "Your total: {totals}\n")?;
            self.pacing.pause(BEAT);

            let action = self.input.hit_or_stand()?;
            writeln!(self.out)?;

            match action {
                Action::Hit => {
                    let card = self.draw()?;
                    self.player.add_card(card);
                    writeln!(self.out, "You drew: {card}\n")?;
                    self.pacing.pause(BEAT);

                    let totals = self.player.possible_totals();
                    if totals.is_bust() {
                        writeln!(self.out)?;
                        self.pacing.pause(HALF_BEAT);
                        writeln!(self.out, "Your total is {}.", totals.min())?;
                        self.pacing.pause(BEAT);
                        debug!(total = totals.min(), "player busts");
                        return Ok(TurnOutcome::Bust);
                    }
                }
                Action::Stand => {
                    let total = totals.best();
                    writeln!(self.out, "You chose to stand at {total}\n")?;
                    self.pacing.pause(BEAT);
                    debug!(total, "player stands");
                    return Ok(TurnOutcome::Stand(total));
                }
            }
        }
    }
}
