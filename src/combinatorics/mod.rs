pub mod letter_combinations;
