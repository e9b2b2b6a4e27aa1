// Core library for Candidate Scout: profile fetching, the saved-candidate
// store, and the browse session state machine.

pub mod directory;
pub mod session;
pub mod store;
pub mod types;

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), "0.1.0");
    }
}
