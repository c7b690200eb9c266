// Graph test modules
#[cfg(test)]
mod builder_tests;
