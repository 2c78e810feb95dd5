pub mod stoich_examples;
