//! The exploration loop. The player walks down the [`RoomTree`] one door at
//! a time and every room's clue is dropped into the [`ClueIndex`] on the
//! first visit.
//!
//! Each step announces the current room, collects its clue if it hasn't been
//! collected yet, then reads one line of input:
//!
//! - `e` goes through the left door,
//! - `d` goes through the right door,
//! - `s` ends the exploration.
//!
//! Anything else is rejected and the player stays put. A door with no room
//! behind it leaves the player where they are too. Running out of input ends
//! the exploration the same way `s` does.

use std::io::{BufRead, Write};

use log::{debug, trace, warn};

use crate::{ClueIndex, Error, RoomId, RoomTree};

/// Builds the clue found in the room called `room_name`.
///
/// # Examples
///
/// ```
/// use detective::explorer::clue_for;
///
/// assert_eq!(clue_for("Cozinha"), "Pista encontrada em Cozinha");
/// ```
pub fn clue_for(room_name: &str) -> String {
    format!("Pista encontrada em {}", room_name)
}

/// One of the two doors out of a room.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The left door.
    Left,
    /// The right door.
    Right,
}

/// What the player asked for on one line of input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Walk through a door.
    Go(Direction),
    /// Stop exploring.
    Quit,
    /// Anything that isn't a known command, including a blank line.
    Invalid,
}

impl Command {
    /// Classifies a line by its first non-whitespace character.
    ///
    /// # Examples
    ///
    /// ```
    /// use detective::explorer::{Command, Direction};
    ///
    /// assert_eq!(Command::parse("  e\n"), Command::Go(Direction::Left));
    /// assert_eq!(Command::parse("direita"), Command::Go(Direction::Right));
    /// assert_eq!(Command::parse("s"), Command::Quit);
    /// assert_eq!(Command::parse("x"), Command::Invalid);
    /// assert_eq!(Command::parse("\n"), Command::Invalid);
    /// ```
    pub fn parse(line: &str) -> Self {
        Self::from_bytes(line.as_bytes())
    }

    /// Classifies a raw line by its first non-whitespace byte. The line
    /// doesn't have to be valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use detective::explorer::Command;
    ///
    /// assert_eq!(Command::from_bytes(b"\t s\r\n"), Command::Quit);
    /// assert_eq!(Command::from_bytes(b"\xe9\n"), Command::Invalid);
    /// ```
    pub fn from_bytes(line: &[u8]) -> Self {
        match line.iter().copied().find(|b| !b.is_ascii_whitespace()) {
            Some(b'e') => Self::Go(Direction::Left),
            Some(b'd') => Self::Go(Direction::Right),
            Some(b's') => Self::Quit,
            _ => Self::Invalid,
        }
    }
}

/// What happened when entering a room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrival {
    /// Name of the room entered.
    pub room: String,
    /// The clue collected here, or `None` on a repeat visit.
    pub clue: Option<String>,
}

/// The outcome of applying a [`Command`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The player walked into another room.
    Moved(RoomId),
    /// There is no room behind that door; the player didn't move.
    Blocked(Direction),
    /// The command wasn't understood; the player didn't move.
    Invalid,
    /// The player asked to stop.
    Quit,
}

/// How an exploration came to an end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    /// The player typed the quit command.
    Quit,
    /// The input ran out or could not be read.
    InputClosed,
}

/// Walks a player through a mansion, collecting clues as they go.
pub struct Explorer<'a> {
    rooms: &'a mut RoomTree,
    clues: &'a mut ClueIndex,
    current: RoomId,
}

impl<'a> Explorer<'a> {
    /// Places the player in the room `start`.
    pub fn new(rooms: &'a mut RoomTree, clues: &'a mut ClueIndex, start: RoomId) -> Self {
        Self {
            rooms,
            clues,
            current: start,
        }
    }

    /// The room the player is standing in.
    pub fn current(&self) -> RoomId {
        self.current
    }

    /// Enters the current room, collecting its clue on the first visit.
    pub fn arrive(&mut self) -> Arrival {
        let room = self.rooms.get(self.current).name().to_string();
        let clue = if self.rooms.visit(self.current) {
            let clue = clue_for(&room);
            self.clues.insert(&clue);
            Some(clue)
        } else {
            trace!(target: "explorer", "Room {:?} already searched", room);
            None
        };
        Arrival { room, clue }
    }

    /// Carries out `command` from the current room.
    pub fn apply(&mut self, command: Command) -> Step {
        let step = match command {
            Command::Go(direction) => {
                let next = match direction {
                    Direction::Left => self.rooms.left(self.current),
                    Direction::Right => self.rooms.right(self.current),
                };
                match next {
                    Some(next) => {
                        self.current = next;
                        Step::Moved(next)
                    }
                    None => Step::Blocked(direction),
                }
            }
            Command::Quit => Step::Quit,
            Command::Invalid => Step::Invalid,
        };
        debug!(target: "explorer", "{:?} -> {:?}", command, step);
        step
    }

    /// Runs the whole exploration, reading one command per line from
    /// `input` and narrating to `output`.
    ///
    /// ## Errors
    ///
    /// Only failures writing to `output` are reported. A failed read ends
    /// the exploration like the end of input does.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<Ending, Error>
    where
        R: BufRead,
        W: Write,
    {
        let mut line = Vec::new();
        loop {
            let arrival = self.arrive();
            writeln!(output, "\nVocê está na sala: {}", arrival.room)?;
            match &arrival.clue {
                Some(clue) => writeln!(output, "Pista coletada: {}", clue)?,
                None => writeln!(output, "Você já coletou a pista desta sala.")?,
            }

            write!(output, "Escolha uma direção (e: esquerda, d: direita, s: sair): ")?;
            output.flush()?;

            line.clear();
            let read = input.read_until(b'\n', &mut line).unwrap_or_else(|e| {
                warn!(target: "explorer", "Failed to read direction: {}", e);
                0
            });
            if read == 0 {
                writeln!(output, "\nEntrada não disponível. Saindo da exploração.")?;
                return Ok(Ending::InputClosed);
            }

            match self.apply(Command::from_bytes(&line)) {
                Step::Moved(_) => {}
                Step::Blocked(Direction::Left) => writeln!(output, "Não há sala à esquerda.")?,
                Step::Blocked(Direction::Right) => writeln!(output, "Não há sala à direita.")?,
                Step::Invalid => writeln!(output, "Direção inválida.")?,
                Step::Quit => return Ok(Ending::Quit),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test::mansion;

    #[test]
    fn test_parse_ignores_leading_whitespace() {
        assert_eq!(Command::parse(" \t d"), Command::Go(Direction::Right));
        assert_eq!(Command::parse("\r\ns"), Command::Quit);
    }

    #[test]
    fn test_from_bytes_rejects_non_utf8() {
        assert_eq!(Command::from_bytes(b"\xe9"), Command::Invalid);
        assert_eq!(Command::from_bytes(b"  \xc3\xa9 e\n"), Command::Invalid);
        assert_eq!(Command::from_bytes(b" e\xff\n"), Command::Go(Direction::Left));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Command::parse("E"), Command::Invalid);
        assert_eq!(Command::parse(""), Command::Invalid);
    }

    #[test]
    fn test_arrive_collects_once() {
        let (mut rooms, [hall, ..]) = mansion();
        let mut clues = ClueIndex::new();
        let mut explorer = Explorer::new(&mut rooms, &mut clues, hall);

        let first = explorer.arrive();
        assert_eq!(first.room, "Hall de Entrada");
        assert_eq!(first.clue.as_deref(), Some("Pista encontrada em Hall de Entrada"));

        let second = explorer.arrive();
        assert_eq!(second.clue, None);
        assert_eq!(clues.len(), 1);
    }

    #[test]
    fn test_apply_moves() {
        let (mut rooms, [hall, library, _, attic]) = mansion();
        let mut clues = ClueIndex::new();
        let mut explorer = Explorer::new(&mut rooms, &mut clues, hall);

        assert_eq!(explorer.apply(Command::Go(Direction::Left)), Step::Moved(library));
        assert_eq!(explorer.apply(Command::Go(Direction::Left)), Step::Moved(attic));
        assert_eq!(explorer.current(), attic);
    }

    #[test]
    fn test_apply_blocked_stays() {
        let (mut rooms, [_, library, ..]) = mansion();
        let mut clues = ClueIndex::new();
        let mut explorer = Explorer::new(&mut rooms, &mut clues, library);

        assert_eq!(
            explorer.apply(Command::Go(Direction::Right)),
            Step::Blocked(Direction::Right)
        );
        assert_eq!(explorer.current(), library);
    }

    #[test]
    fn test_apply_invalid_stays_without_clue() {
        let (mut rooms, [hall, ..]) = mansion();
        let mut clues = ClueIndex::new();
        let mut explorer = Explorer::new(&mut rooms, &mut clues, hall);

        assert_eq!(explorer.apply(Command::parse("x")), Step::Invalid);
        assert_eq!(explorer.current(), hall);
        assert!(clues.is_empty());
    }

    #[test]
    fn test_run_quits() {
        let (mut rooms, [hall, ..]) = mansion();
        let mut clues = ClueIndex::new();
        let mut output = Vec::new();

        let ending = Explorer::new(&mut rooms, &mut clues, hall)
            .run("d\ns\n".as_bytes(), &mut output)
            .unwrap();

        assert_eq!(ending, Ending::Quit);
        assert_eq!(
            clues.traverse_in_order(),
            ["Pista encontrada em Cozinha", "Pista encontrada em Hall de Entrada"]
        );
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Você está na sala: Cozinha"));
    }

    #[test]
    fn test_run_end_of_input() {
        let (mut rooms, [hall, ..]) = mansion();
        let mut clues = ClueIndex::new();
        let mut output = Vec::new();

        let ending = Explorer::new(&mut rooms, &mut clues, hall)
            .run("".as_bytes(), &mut output)
            .unwrap();

        assert_eq!(ending, Ending::InputClosed);
        assert_eq!(clues.len(), 1);
        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with("Entrada não disponível. Saindo da exploração.\n"));
    }

    #[test]
    fn test_run_reports_missing_door() {
        let (mut rooms, [hall, ..]) = mansion();
        let mut clues = ClueIndex::new();
        let mut output = Vec::new();

        Explorer::new(&mut rooms, &mut clues, hall)
            .run("d\ne\nd\nx\ns\n".as_bytes(), &mut output)
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Não há sala à esquerda."));
        assert!(output.contains("Não há sala à direita."));
        assert!(output.contains("Direção inválida."));
        assert_eq!(output.matches("Você já coletou a pista desta sala.").count(), 3);
    }
}
