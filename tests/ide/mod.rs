pub mod tests_completion;
