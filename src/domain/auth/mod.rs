pub mod token_set;
