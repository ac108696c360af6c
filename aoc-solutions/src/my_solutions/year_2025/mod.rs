pub mod problem_1;
