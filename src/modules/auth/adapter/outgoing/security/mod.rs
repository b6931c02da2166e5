pub mod random_code_generator;
