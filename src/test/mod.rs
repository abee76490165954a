use crate::{seed, RoomId, RoomTree};


/// The seeded mansion with its rooms as `[hall, library, kitchen, attic]`.
pub(crate) fn mansion() -> (RoomTree, [RoomId; 4]) {
    let (rooms, hall) = seed::mansion();
    let library = rooms.left(hall).unwrap();
    let kitchen = rooms.right(hall).unwrap();
    let attic = rooms.left(library).unwrap();
    (rooms, [hall, library, kitchen, attic])
}
