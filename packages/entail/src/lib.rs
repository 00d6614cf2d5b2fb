pub mod error;
pub mod explanation;
pub mod propositional_logic;
