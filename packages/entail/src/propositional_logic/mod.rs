pub mod evaluate;
pub mod formula;
pub mod model_check;
pub mod parser;
pub mod truth_table;
pub mod types;
