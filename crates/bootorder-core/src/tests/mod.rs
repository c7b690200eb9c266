// Crate-level test modules
#[cfg(test)]
mod integration;
