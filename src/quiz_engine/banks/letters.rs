use crate::quiz_engine::bank::QuestionBank;

static LETTERS: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

pub fn bank() -> QuestionBank<&'static str> {
    QuestionBank::new("letters", LETTERS)
}
