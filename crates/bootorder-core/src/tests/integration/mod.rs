// End-to-end flows: manifest -> registry -> graph -> order -> activation
#[cfg(test)]
mod manifest_flow_tests;
