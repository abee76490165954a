//! The fixed game content: the mansion's layout and the clue/suspect
//! associations made once the exploration is over.

use crate::{RoomId, RoomTree, SuspectTable};

/// `(clue, suspect)` pairs fed to the suspect table, in order. The first
/// pair is repeated on purpose; the repeat has no effect.
pub const ASSOCIATIONS: [(&str, &str); 4] = [
    ("Pista encontrada em Biblioteca", "Sr. Verde"),
    ("Pista encontrada em Cozinha", "Sra. Rosa"),
    ("Pista encontrada em Biblioteca", "Sr. Verde"),
    ("Pista encontrada em Sótão", "Prof. Azul"),
];

/// Builds the mansion and returns it with its entrance.
///
/// ```text
///          Hall de Entrada
///           /          \
///      Biblioteca    Cozinha
///        /
///     Sótão
/// ```
pub fn mansion() -> (RoomTree, RoomId) {
    let mut rooms = RoomTree::new();
    let hall = rooms.create("Hall de Entrada");
    let library = rooms.create("Biblioteca");
    let kitchen = rooms.create("Cozinha");
    let attic = rooms.create("Sótão");
    rooms.connect(Some(hall), Some(library), Some(kitchen));
    rooms.connect(Some(library), Some(attic), None);
    (rooms, hall)
}

/// Feeds every pair of [`ASSOCIATIONS`] into `table`.
pub fn associate_suspects(table: &mut SuspectTable) {
    for (clue, suspect) in ASSOCIATIONS {
        table.associate(clue, suspect);
    }
}
