/// A position on the 6x6 board. Values range 0-5. (0,0) is upper-left,
/// (5,5) is lower-right. X increases left-to-right, Y increases
/// top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}
